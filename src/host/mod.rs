//! Host resolution task.
//!
//! Resolves one hostname across the requested record types and decides
//! whether it exists. Every failure is returned as data in the outcome.

use std::time::Duration;

use log::debug;

use crate::config::MIN_TIMEOUT_MS;
use crate::dns::{normalize_record_types, RecordType, Resolver, ResolverFactory};
use crate::domain::encode_hostname;
use crate::error_handling::{HostError, LookupError};
use crate::models::{AnswerRecord, BatchRequest, HostOutcome};

/// Read-only options shared by every host task of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostQueryOptions {
    /// Record types queried, in order
    pub record_types: Vec<RecordType>,
    /// Per-query timeout
    pub timeout: Duration,
    /// Custom nameservers, if any
    pub servers: Option<Vec<String>>,
    /// Stop after the first matching type (only with `require_any`)
    pub fast: bool,
    /// Existence policy: any type vs every type
    pub require_any: bool,
}

impl HostQueryOptions {
    /// Normalizes record types and clamps the timeout of a request.
    pub fn from_request(request: &BatchRequest) -> Self {
        Self {
            record_types: normalize_record_types(&request.record_types),
            timeout: Duration::from_millis(request.timeout_ms.max(MIN_TIMEOUT_MS)),
            servers: request.servers.clone(),
            fast: request.fast,
            require_any: request.require_any,
        }
    }
}

/// Resolves one hostname and applies the existence policy.
///
/// Record types are queried sequentially in order; an empty list means the
/// default types. With `fast` and `require_any` set, the first matching type
/// ends the iteration. Only the first non-negative lookup error is kept, and
/// only when the host does not exist.
pub async fn resolve_host(
    hostname: &str,
    options: &HostQueryOptions,
    factory: &dyn ResolverFactory,
) -> HostOutcome {
    let reported = hostname.trim().to_string();
    let query_name = encode_hostname(&reported);
    let resolver = factory.build(options.servers.as_deref(), options.timeout);
    let defaults;
    let record_types = if options.record_types.is_empty() {
        defaults = RecordType::defaults();
        &defaults
    } else {
        &options.record_types
    };

    let mut matched_types: Vec<RecordType> = Vec::new();
    let mut records = Vec::new();
    let mut first_error: Option<HostError> = None;

    for record_type in record_types {
        let matched = match lookup_with_timeout(
            resolver.as_ref(),
            &query_name,
            record_type,
            options.timeout,
        )
        .await
        {
            Ok(values) if values.is_empty() => {
                debug!("{query_name} {record_type}: no records");
                false
            }
            Ok(values) => {
                debug!("{query_name} {record_type}: {} record(s)", values.len());
                if !matched_types.contains(record_type) {
                    matched_types.push(record_type.clone());
                }
                records.extend(values.into_iter().map(|value| AnswerRecord {
                    record_type: record_type.clone(),
                    value,
                }));
                true
            }
            Err(e) if e.is_negative_answer() => {
                debug!("{query_name} {record_type}: {e}");
                false
            }
            Err(e) => {
                debug!("{query_name} {record_type} failed: {e}");
                if first_error.is_none() {
                    first_error = Some(HostError::from(&e));
                }
                false
            }
        };

        if matched && options.fast && options.require_any {
            break;
        }
    }

    let exists = if options.require_any {
        !matched_types.is_empty()
    } else {
        record_types
            .iter()
            .all(|record_type| matched_types.contains(record_type))
    };

    HostOutcome {
        hostname: reported,
        exists,
        matched_types,
        records,
        error: if exists { None } else { first_error },
    }
}

async fn lookup_with_timeout(
    resolver: &dyn Resolver,
    name: &str,
    record_type: &RecordType,
    timeout: Duration,
) -> Result<Vec<String>, LookupError> {
    match tokio::time::timeout(timeout, resolver.lookup(name, record_type)).await {
        Ok(result) => result,
        Err(_) => Err(LookupError::Timeout(timeout)),
    }
}

#[cfg(test)]
mod tests;
