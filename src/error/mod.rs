//! Error types and handling for pkgguard
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`deletion`]: Deletion guard rejections
//! - [`registry`]: Registry discovery and manifest errors
//! - [`fs`]: File system errors

pub mod deletion;
pub mod fs;
pub mod registry;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pkgguard operations
#[derive(Error, Diagnostic, Debug)]
pub enum GuardError {
    // Deletion errors
    #[error("Package '{name}' is not installed")]
    #[diagnostic(
        code(pkgguard::delete::not_installed),
        help("Run 'pkgguard list' to see installed packages")
    )]
    NotInstalled { name: String },

    #[error("Package '{package}' is required by '{dependent}'")]
    #[diagnostic(
        code(pkgguard::delete::required_by_single),
        help("Delete the dependent package first, or include it in the same request")
    )]
    RequiredBySingle { package: String, dependent: String },

    #[error("Package '{package}' is required by: {}", .dependents.join(", "))]
    #[diagnostic(
        code(pkgguard::delete::required_by_many),
        help("Delete the dependent packages first, or include them in the same request")
    )]
    RequiredByMany {
        package: String,
        dependents: Vec<String>,
    },

    #[error("Deletion check failed with {problems} problem(s)")]
    #[diagnostic(
        code(pkgguard::delete::check_failed),
        help("Fix the problems listed above and run the check again")
    )]
    CheckFailed { problems: usize },

    #[error("Package '{name}' could not be removed: {reason}")]
    #[diagnostic(code(pkgguard::delete::removal_failed))]
    RemovalFailed { name: String, reason: String },

    #[error("Failed to read confirmation: {message}")]
    #[diagnostic(code(pkgguard::delete::prompt_failed))]
    PromptFailed { message: String },

    // Registry errors
    #[error("Package registry not found from: {path}")]
    #[diagnostic(
        code(pkgguard::registry::not_found),
        help("Run from a directory containing .pkgguard/ or pass --root")
    )]
    RegistryNotFound { path: String },

    #[error("Failed to parse registry manifest: {path}: {reason}")]
    #[diagnostic(code(pkgguard::registry::parse_failed))]
    RegistryParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(pkgguard::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(pkgguard::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(pkgguard::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for GuardError {
    fn from(err: std::io::Error) -> Self {
        GuardError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for GuardError {
    fn from(err: serde_json::Error) -> Self {
        GuardError::RegistryParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for GuardError {
    fn from(err: inquire::InquireError) -> Self {
        GuardError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, GuardError>;
