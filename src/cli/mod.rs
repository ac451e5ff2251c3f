//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - update: Update command arguments
//! - uninstall: Uninstall command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod install;
pub mod uninstall;
pub mod update;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use uninstall::UninstallArgs;
pub use update::UpdateArgs;

/// nudge - Learn agent installer
///
/// Install the Learn coding-mentor agent for OpenCode, GitHub Copilot, and
/// Claude Code.
#[derive(Parser, Debug)]
#[command(
    name = "nudge",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "AI coding mentor that guides with questions, not answers",
    long_about = "nudge installs the Learn agent, an AI coding mentor that guides with \
                  questions instead of answers, into the configuration directories of \
                  OpenCode, GitHub Copilot, and Claude Code.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  nudge install                           \x1b[90m# Interactive install\x1b[0m\n   \
                  nudge install --no-tui --to opencode    \x1b[90m# OpenCode only, defaults\x1b[0m\n   \
                  nudge install --color \"#10B981\"         \x1b[90m# Pick the agent color\x1b[0m\n   \
                  nudge update --preserve-config          \x1b[90m# Update, keep settings\x1b[0m\n   \
                  nudge uninstall --force                 \x1b[90m# Remove everywhere\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Root directory for user-level configuration (defaults to home)
    #[arg(long, global = true, env = "NUDGE_CONFIG_ROOT", hide = true)]
    pub config_root: Option<PathBuf>,

    /// Root directory for project-level configuration (defaults to cwd)
    #[arg(long, global = true, env = "NUDGE_PROJECT_DIR", hide = true)]
    pub project_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install the Learn agent
    Install(InstallArgs),

    /// Update the Learn agent to the latest version
    Update(UpdateArgs),

    /// Remove the Learn agent from all installed platforms
    Uninstall(UninstallArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
