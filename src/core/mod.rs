//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Coverage report model and loader
//! - Error taxonomy shared by every step
//! - Path relativization against the base path
//! - Fixed-width table rendering

pub mod error;
pub mod model;
pub mod paths;
pub mod render;
