//! Flows module - End-to-end operations built from core and backends
//!
//! Provides:
//! - concat: the coverage profile concatenator

pub mod concat;
