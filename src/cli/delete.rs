use clap::Parser;

/// Arguments for the delete command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Delete a package:\n    pkgguard delete libfoo\n\n\
                  Delete without confirmation:\n    pkgguard delete libfoo -y\n\n\
                  Delete a package together with its dependents:\n    pkgguard delete libfoo app-a app-b\n\n\
                  Show what would be deleted:\n    pkgguard delete libfoo --dry-run\n\n\
                  Select packages interactively:\n    pkgguard delete")]
pub struct DeleteArgs {
    /// Packages to delete (if omitted, shows interactive menu)
    pub names: Vec<String>,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Show what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,
}
