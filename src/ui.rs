//! Styled terminal output helpers.

use console::Style;

/// Print the command banner.
pub fn intro() {
    println!("{}", Style::new().on_cyan().black().apply_to(" nudge "));
    println!();
}

pub fn log_info(message: &str) {
    println!("{}", message);
}

pub fn log_warning(message: &str) {
    println!("{}", Style::new().yellow().apply_to(message));
}

pub fn log_error(message: &str) {
    eprintln!("{}", Style::new().red().apply_to(message));
}

pub fn log_success(message: &str) {
    println!("{}", Style::new().green().apply_to(message));
}

/// Print a labelled block of configuration lines.
pub fn note(title: &str, lines: &[(&str, String)]) {
    println!();
    println!("{}", Style::new().bold().apply_to(title));
    for (label, value) in lines {
        println!("  {} {}", Style::new().dim().apply_to(format!("{label}:")), value);
    }
}

pub fn outro(message: &str) {
    println!();
    println!("{}", Style::new().green().apply_to(message));
}

pub fn outro_warn(message: &str) {
    println!();
    println!("{}", Style::new().yellow().apply_to(message));
}
