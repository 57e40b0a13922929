//! Registry errors

use super::GuardError;

/// Creates a registry not found error
pub fn not_found(path: impl Into<String>) -> GuardError {
    GuardError::RegistryNotFound { path: path.into() }
}

/// Creates a registry manifest parse error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> GuardError {
    GuardError::RegistryParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
