//! High-level operations
//!
//! - delete: Dependency-safe batch deletion of installed packages

pub mod delete;
