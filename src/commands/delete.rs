//! Delete command implementation
//!
//! Thin CLI wrapper: opens the registry, resolves the requested names, and
//! runs the delete operation inside a manifest transaction.

use std::path::PathBuf;

use console::Style;
use tracing::debug;

use crate::cli::DeleteArgs;
use crate::commands::{check, open_registry};
use crate::error::Result;
use crate::operations::delete::{
    DeleteOperation, DeleteOutcome, TerminalConfirm, select_packages_interactively,
};
use crate::transaction::Transaction;

/// Run delete command
pub fn run(root: Option<PathBuf>, args: DeleteArgs) -> Result<()> {
    let mut registry = open_registry(root)?;

    let names = if args.names.is_empty() {
        select_packages_interactively(&registry)?
    } else {
        args.names
    };

    if names.is_empty() {
        debug!("nothing selected for deletion");
        return Ok(());
    }

    if args.dry_run {
        return check::report(&registry, &names);
    }

    let mut transaction = Transaction::new(&registry);
    transaction.backup_manifest()?;

    let mut confirm = TerminalConfirm;
    let mut operation = DeleteOperation::new(&mut registry, &mut confirm);
    let outcome = match names.as_slice() {
        [single] if !args.yes => operation.safe_delete(single)?,
        _ => operation.safe_delete_packages(&names, args.yes)?,
    };

    transaction.commit();

    for line in outcome_lines(&outcome) {
        println!("{line}");
    }
    Ok(())
}

fn outcome_lines(outcome: &DeleteOutcome) -> Vec<String> {
    match outcome {
        DeleteOutcome::Deleted(packages) if packages.is_empty() => Vec::new(),
        DeleteOutcome::Deleted(packages) => {
            let mut lines = vec![format!(
                "{} {} package(s):",
                Style::new().green().bold().apply_to("Deleted"),
                packages.len()
            )];
            lines.extend(packages.iter().map(|name| format!("  - {name}")));
            lines
        }
        DeleteOutcome::Aborted => vec!["Deletion cancelled.".to_string()],
    }
}
