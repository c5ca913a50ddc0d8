//! Command-line application support.
//!
//! This module provides input reading, statistics printing, JSON output and
//! the exit code policy used by the binary.

pub mod exit;
pub mod input;
pub mod output;
pub mod statistics;

// Re-export public API
pub use exit::evaluate_exit_code;
pub use input::{collect_hostnames, parse_hostname_line, read_hostnames};
pub use output::write_result;
pub use statistics::{print_error_statistics, print_summary, ErrorStatistics};
