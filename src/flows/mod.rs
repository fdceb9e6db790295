//! Flows module - End-to-end operations built from the core pieces
//!
//! Provides:
//! - summary: Load a coverage report and emit its text table

pub mod summary;
