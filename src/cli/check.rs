use clap::Parser;

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check whether a package can be deleted:\n    pkgguard check libfoo\n\n\
                  Check a batch:\n    pkgguard check libfoo app-a")]
pub struct CheckArgs {
    /// Packages to check
    #[arg(required = true)]
    pub names: Vec<String>,
}
