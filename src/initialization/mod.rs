//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - DNS resolvers
//! - The semaphore bounding the worker pool

mod logger;
mod resolver;

use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::config::MIN_CONCURRENCY;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::{custom_resolver_config, init_resolver, parse_nameserver};

/// Initializes a semaphore for controlling concurrency.
///
/// Creates a new semaphore with the specified permit count, clamped to
/// `1..=Semaphore::MAX_PERMITS`.
/// This semaphore limits the number of concurrent host resolution tasks.
///
/// # Arguments
///
/// * `count` - Maximum number of concurrent operations allowed
///
/// # Returns
///
/// An `Arc<Semaphore>` that can be shared across multiple tasks.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(
        count.clamp(MIN_CONCURRENCY, Semaphore::MAX_PERMITS),
    ))
}
