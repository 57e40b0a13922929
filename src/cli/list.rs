use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List all installed packages:\n    pkgguard list\n\n\
                  Show requirements and dependents:\n    pkgguard list --detailed")]
pub struct ListArgs {
    /// Show requirements and dependents of each package
    #[arg(long)]
    pub detailed: bool,
}
