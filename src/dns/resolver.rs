//! Resolver capability used by host resolution.
//!
//! The host task only needs "look up this name for this record type". The
//! traits here keep it independent of the resolver library, so tests can
//! substitute a scripted implementation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::dns::RecordType;
use crate::error_handling::LookupError;

/// Performs single DNS lookups.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Looks up `name` (already ASCII-encoded) for one record type.
    ///
    /// Returns the textual answer values in answer order. An empty vector
    /// means the name exists but has no records of that type.
    async fn lookup(&self, name: &str, record_type: &RecordType)
        -> Result<Vec<String>, LookupError>;
}

/// Builds resolvers for one host task.
pub trait ResolverFactory: Send + Sync {
    /// Returns a resolver using `servers` when given, else the system
    /// configuration.
    ///
    /// Never fails: an unusable server list falls back to the default
    /// configuration.
    fn build(&self, servers: Option<&[String]>, timeout: Duration) -> Arc<dyn Resolver>;
}
