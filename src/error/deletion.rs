//! Deletion guard rejections

use super::GuardError;

/// Creates a not installed error
pub fn not_installed(name: impl Into<String>) -> GuardError {
    GuardError::NotInstalled { name: name.into() }
}

/// Creates the rejection for a package that still has surviving dependents.
///
/// Picks the single or many variant from the number of dependents. Callers
/// never pass an empty list; a package without dependents is not a violation.
pub fn required_by(package: impl Into<String>, mut dependents: Vec<String>) -> GuardError {
    let package = package.into();
    if dependents.len() == 1 {
        GuardError::RequiredBySingle {
            package,
            dependent: dependents.remove(0),
        }
    } else {
        GuardError::RequiredByMany {
            package,
            dependents,
        }
    }
}

/// Creates a removal failed error
pub fn removal_failed(name: impl Into<String>, reason: impl Into<String>) -> GuardError {
    GuardError::RemovalFailed {
        name: name.into(),
        reason: reason.into(),
    }
}

/// Creates the error for a check report that found problems
pub fn check_failed(problems: usize) -> GuardError {
    GuardError::CheckFailed { problems }
}
