//! DNS lookups behind a narrow resolver capability.
//!
//! This module provides:
//! - Record type tags and their normalization
//! - The `Resolver` / `ResolverFactory` traits the host task depends on
//! - The production implementation over `hickory-resolver`

mod hickory;
mod record_type;
mod resolver;

// Re-export public API
pub use hickory::{HickoryResolver, HickoryResolverFactory};
pub use record_type::{normalize_record_types, RecordType};
pub use resolver::{Resolver, ResolverFactory};
