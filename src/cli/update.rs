use clap::Parser;
use std::path::PathBuf;

/// Arguments for the update command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Update, keeping current model and color:\n    nudge update --preserve-config\n\n\
                  Update interactively:\n    nudge update\n\n\
                  Update from a custom template:\n    nudge update --template ./custom.md")]
pub struct UpdateArgs {
    /// Keep existing model and color settings (OpenCode only)
    #[arg(long = "preserve-config")]
    pub preserve_config: bool,

    /// Non-interactive mode, implies --preserve-config
    #[arg(long = "no-tui")]
    pub no_tui: bool,

    /// Use an agent template file instead of the built-in one
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,
}
