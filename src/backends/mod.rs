//! Backends module - Filesystem side effects
//!
//! Provides:
//! - walk: tree traversal with extension filtering and skipped directories
//! - output: create-or-append output writing

pub mod output;
pub mod walk;
