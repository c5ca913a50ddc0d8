//! Configuration constants.
//!
//! This module defines the defaults and floors applied to batch requests.

/// Per-query timeout used when the caller does not supply one.
pub const DEFAULT_TIMEOUT_MS: u64 = 2000;

/// Smallest per-query timeout accepted; lower values are clamped up to it.
pub const MIN_TIMEOUT_MS: u64 = 100;

/// Maximum number of hosts resolved at the same time (semaphore permits).
pub const DEFAULT_CONCURRENCY: usize = 20;

/// Smallest worker pool size; zero is clamped up to it.
pub const MIN_CONCURRENCY: usize = 1;

/// Record types queried when none (or only invalid ones) are requested.
pub const DEFAULT_RECORD_TYPES: [&str; 3] = ["A", "AAAA", "CNAME"];

/// Port assumed for custom nameservers given without one.
pub const DEFAULT_DNS_PORT: u16 = 53;

/// Exit code used when `--fail-on` matches the batch outcome.
pub const EXIT_CODE_POLICY_FAILURE: i32 = 2;
