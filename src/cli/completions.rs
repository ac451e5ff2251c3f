use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    nudge completions bash > ~/.bash_completion.d/nudge\n\n\
                  Generate zsh completions:\n    nudge completions zsh > ~/.zfunc/_nudge\n\n\
                  Generate fish completions:\n    nudge completions fish > ~/.config/fish/completions/nudge.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
