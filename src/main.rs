//! nudge - Learn agent installer
//!
//! A command line tool that installs the Learn coding-mentor agent into the
//! configuration directories of OpenCode, GitHub Copilot, and Claude Code.

use clap::Parser;

mod cli;
mod commands;
mod error;
mod frontmatter;
mod platform;
mod progress;
mod storage;
mod template;
mod ui;

use cli::{Cli, Commands};
use error::{NudgeError, Result};
use platform::Paths;

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Install(args) => {
            let paths = Paths::resolve(cli.config_root, cli.project_dir)?;
            commands::install::run(&paths, args)
        }
        Commands::Update(args) => {
            let paths = Paths::resolve(cli.config_root, cli.project_dir)?;
            commands::update::run(&paths, args)
        }
        Commands::Uninstall(args) => {
            let paths = Paths::resolve(cli.config_root, cli.project_dir)?;
            commands::uninstall::run(&paths, args)
        }
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => {}
        Err(NudgeError::Cancelled) => {
            // Declining a prompt ends the operation cleanly.
            println!("Operation cancelled.");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
