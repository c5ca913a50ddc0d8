//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, concurrency, default record types)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, FailOn, LogFormat, LogLevel};
