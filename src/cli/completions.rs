use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Load bash completions for this session:\n    source <(iconreg completions bash)\n\n\
                  Install zsh completions:\n    iconreg completions zsh > \"${fpath[1]}/_iconreg\"\n\n\
                  Install fish completions:\n    iconreg completions fish > ~/.config/fish/completions/iconreg.fish")]
pub struct CompletionsArgs {
    /// Target shell: bash, elvish, fish, powershell (or pwsh), zsh
    #[arg(value_name = "SHELL")]
    pub shell: String,
}
