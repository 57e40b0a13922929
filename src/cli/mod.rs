//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - delete: Delete command arguments
//! - check: Check command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod check;
pub mod completions;
pub mod delete;
pub mod list;

pub use check::CheckArgs;
pub use completions::CompletionsArgs;
pub use delete::DeleteArgs;
pub use list::ListArgs;

/// pkgguard - dependency-safe package deletion
///
/// Refuses to delete installed packages that other installed packages still require.
#[derive(Parser, Debug)]
#[command(
    name = "pkgguard",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Dependency-safe deletion of installed packages",
    long_about = "pkgguard deletes installed packages as a single batch, and refuses the whole \
                  batch when any package in it is still required by an installed package \
                  outside the batch.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  pkgguard delete libfoo              \x1b[90m# Delete one package after confirmation\x1b[0m\n   \
                  pkgguard delete app libfoo -y       \x1b[90m# Delete a package with its dependent\x1b[0m\n   \
                  pkgguard delete                     \x1b[90m# Pick packages interactively\x1b[0m\n   \
                  pkgguard check libfoo               \x1b[90m# Report what blocks a deletion\x1b[0m\n   \
                  pkgguard list                       \x1b[90m# List installed packages\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Directory to start registry discovery from (defaults to current directory)
    #[arg(long, short = 'r', global = true, env = "PKGGUARD_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Delete installed packages
    #[command(visible_alias = "uninstall")]
    Delete(DeleteArgs),

    /// Check whether packages can be deleted without deleting them
    Check(CheckArgs),

    /// List installed packages
    List(ListArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
