//! pkgguard - dependency-safe package deletion
//!
//! Deletes installed packages from a package registry as one batch, refusing
//! the whole batch when any requested package is still required by an
//! installed package outside the batch.

use clap::Parser;

mod cli;
mod commands;
mod error;
mod logging;
mod operations;
mod registry;
#[cfg(test)]
mod test_fixtures;
mod transaction;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Delete(args) => commands::delete::run(cli.root, args),
        Commands::Check(args) => commands::check::run(cli.root, args),
        Commands::List(args) => commands::list::run(cli.root, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
