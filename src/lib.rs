//! gover - concatenate Go coverage profile fragments
//!
//! Walks a directory tree, collects every `.coverprofile` file outside `vendor`
//! directories, and appends them to a single profile with one leading
//! `mode:` header.

pub mod backends;
pub mod cli;
pub mod core;
pub mod flows;

pub use crate::core::error::GoverError;
pub use crate::core::report::ConcatReport;
pub use crate::flows::concat::{concatenate, ConcatOptions, Concatenator};
