use clap::Parser;

/// Arguments for the uninstall command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Uninstall with confirmation:\n    nudge uninstall\n\n\
                  Uninstall without confirmation:\n    nudge uninstall --force")]
pub struct UninstallArgs {
    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_cli_parsing_uninstall_defaults() {
        let cli = Cli::try_parse_from(["nudge", "uninstall"]).unwrap();
        match cli.command {
            Commands::Uninstall(args) => {
                assert!(!args.force);
            }
            _ => panic!("Expected Uninstall command"),
        }
    }

    #[test]
    fn test_cli_parsing_uninstall_force() {
        let cli = Cli::try_parse_from(["nudge", "uninstall", "-f"]).unwrap();
        match cli.command {
            Commands::Uninstall(args) => {
                assert!(args.force);
            }
            _ => panic!("Expected Uninstall command"),
        }
    }
}
