//! Error handling.
//!
//! This module provides:
//! - The per-lookup error taxonomy (`LookupError`, `LookupErrorKind`)
//! - The description captured into host outcomes (`HostError`)
//! - Initialization and nameserver parsing errors
//!
//! Lookup errors never abort a batch: they are recovered at the lookup level
//! and carried as data in the host outcome.

mod types;

// Re-export public API
pub use types::{HostError, InitializationError, LookupError, LookupErrorKind, NameserverError};
