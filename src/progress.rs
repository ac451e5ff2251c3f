//! Spinner display for file operations

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Start a steady-tick spinner with the given message.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template(&format!("{{spinner}} {message}"))
    {
        pb.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]));
    }
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
