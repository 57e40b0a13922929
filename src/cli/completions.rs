use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    pkgguard completions bash > ~/.bash_completion.d/pkgguard\n\n\
                  Generate zsh completions:\n    pkgguard completions zsh > ~/.zfunc/_pkgguard\n\n\
                  Generate fish completions:\n    pkgguard completions fish > ~/.config/fish/completions/pkgguard.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
