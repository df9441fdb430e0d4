use clap::Args;

/// Arguments for the completions command
#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Load completions into the current bash session:\n    source <(marty completions bash)\n\n\
                  Install zsh completions:\n    marty completions zsh > ~/.zfunc/_marty")]
pub struct CompletionsArgs {
    /// Target shell: bash, elvish, fish, powershell (or pwsh), zsh
    #[arg(value_name = "SHELL")]
    pub shell: String,
}
