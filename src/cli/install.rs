use clap::Parser;
use std::path::PathBuf;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Interactive install for all platforms:\n    nudge install\n\n\
                  Non-interactive install with defaults:\n    nudge install --no-tui\n\n\
                  Install for specific platforms:\n    nudge install --to opencode claudecode\n\n\
                  Pick model and color up front:\n    nudge install --model anthropic/claude-sonnet-4 --color \"#14B8A6\"")]
pub struct InstallArgs {
    /// Install only for specific platforms (e.g., --to opencode copilot)
    #[arg(long = "to", short = 't', value_name = "PLATFORM", num_args = 1..)]
    pub platforms: Vec<String>,

    /// Install for all platforms without prompting
    #[arg(long)]
    pub all: bool,

    /// Non-interactive mode with defaults
    #[arg(long = "no-tui")]
    pub no_tui: bool,

    /// Model for OpenCode (e.g., anthropic/claude-sonnet-4)
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Agent color for OpenCode in hex format (e.g., #14B8A6)
    #[arg(long, value_name = "HEX")]
    pub color: Option<String>,

    /// Use an agent template file instead of the built-in one
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Skip overwrite confirmation prompts
    #[arg(long, short = 'y')]
    pub yes: bool,
}
