//! Input/output surfaces around the solver core
//!
//! This module contains:
//! - Error types shared by the library and the binary
//! - Compile-time defaults and limits
//! - The command-line driver, progress display and text rendering

/// Command-line interface for solving maze catalogs
pub mod cli;
/// Limits and default parameters
pub mod configuration;
/// Error types and constructors
pub mod error;
/// Progress bars for solve attempts
pub mod progress;
/// Plain-text rendering of grid states
pub mod visualization;
