//! domain_exists library: bulk DNS existence checks
//!
//! This library resolves a batch of hostnames concurrently and reports, for
//! each one, whether it exists in DNS. Each host is queried for a list of
//! record types (A, AAAA and CNAME by default) under a per-query timeout, and
//! an existence policy decides whether any or every type must match.
//!
//! # Example
//!
//! ```no_run
//! use domain_exists::{resolve_batch_with_hickory, BatchRequest};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let request = BatchRequest {
//!     record_types: vec!["A".to_string(), "MX".to_string()],
//!     require_any: false,
//!     ..BatchRequest::new(["example.com", "example.org"])
//! };
//!
//! let result = resolve_batch_with_hickory(request).await;
//! for outcome in &result.results {
//!     println!("{}: {}", outcome.hostname, outcome.exists);
//! }
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod app;
mod batch;
pub mod config;
pub mod dns;
mod domain;
mod error_handling;
mod host;
pub mod initialization;
mod models;

// Re-export public API
pub use app::evaluate_exit_code;
pub use batch::{resolve_batch, resolve_batch_with_hickory};
pub use config::{Config, FailOn, LogFormat, LogLevel};
pub use dns::{
    normalize_record_types, HickoryResolverFactory, RecordType, Resolver, ResolverFactory,
};
pub use domain::{encode_hostname, to_ascii_hostname};
pub use error_handling::{
    HostError, InitializationError, LookupError, LookupErrorKind, NameserverError,
};
pub use host::{resolve_host, HostQueryOptions};
pub use models::{AnswerRecord, BatchRequest, BatchResult, HostOutcome, Summary};
