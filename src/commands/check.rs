//! Check command implementation
//!
//! Reports every problem that would block deleting the given packages,
//! without deleting anything. Also backs `delete --dry-run`.

use std::path::PathBuf;

use console::Style;

use crate::cli::CheckArgs;
use crate::commands::open_registry;
use crate::error::{self, Result};
use crate::operations::delete::{CheckReport, check_all};
use crate::registry::PackageRegistry;

/// Run check command
pub fn run(root: Option<PathBuf>, args: CheckArgs) -> Result<()> {
    let registry = open_registry(root)?;
    report(&registry, &args.names)
}

/// Print the check report for `names`; fails with `CheckFailed` when the
/// request would be rejected
pub fn report<R>(registry: &R, names: &[String]) -> Result<()>
where
    R: PackageRegistry + ?Sized,
{
    let report = check_all(registry, names);
    for line in report_lines(&report) {
        println!("{line}");
    }

    if report.is_clean() {
        Ok(())
    } else {
        Err(error::deletion::check_failed(report.violations.len()))
    }
}

fn report_lines(report: &CheckReport) -> Vec<String> {
    if report.is_clean() {
        let mut lines = vec![format!(
            "{} {} package(s) can be deleted:",
            Style::new().green().bold().apply_to("OK:"),
            report.packages.len()
        )];
        lines.extend(report.packages.iter().map(|name| format!("  - {name}")));
        return lines;
    }

    let mut lines = vec![format!(
        "{} {} problem(s) block this deletion:",
        Style::new().red().bold().apply_to("Rejected:"),
        report.violations.len()
    )];
    lines.extend(report.violations.iter().map(|v| format!("  - {v}")));
    lines
}
