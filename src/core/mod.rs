//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Error kinds (GoverError)
//! - Mode header handling and the accumulation buffer
//! - Concatenation report and its rendering
//! - Path and extension helpers
//! - Logging setup

pub mod error;
pub mod logging;
pub mod paths;
pub mod profile;
pub mod report;
