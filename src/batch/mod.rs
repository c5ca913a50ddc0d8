//! Batch coordinator.
//!
//! Runs one host resolution task per hostname under a bounded worker pool
//! and gathers the outcomes in completion order.

use std::sync::Arc;
use std::time::Instant;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{debug, info, warn};

use crate::config::MIN_CONCURRENCY;
use crate::dns::{HickoryResolverFactory, ResolverFactory};
use crate::error_handling::{HostError, LookupErrorKind};
use crate::host::{resolve_host, HostQueryOptions};
use crate::initialization::init_semaphore;
use crate::models::{BatchRequest, BatchResult, HostOutcome};

/// Resolves every hostname of `request` and summarizes the outcomes.
///
/// At most `request.concurrency` hosts (at least one) are resolved at once.
/// Outcomes are returned in completion order, one per submitted hostname,
/// duplicates included. This function never fails: lookup errors are
/// captured per host, and a host task that panics or is cancelled yields a
/// failed outcome in its place.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use domain_exists::{resolve_batch, BatchRequest, HickoryResolverFactory};
///
/// # async fn example() {
/// let request = BatchRequest::new(["example.com", "does-not-exist.invalid"]);
/// let result = resolve_batch(request, Arc::new(HickoryResolverFactory)).await;
/// println!("{} of {} exist", result.summary.exists, result.summary.total);
/// # }
/// ```
pub async fn resolve_batch(
    request: BatchRequest,
    factory: Arc<dyn ResolverFactory>,
) -> BatchResult {
    if request.hostnames.is_empty() {
        debug!("Empty batch, nothing to resolve");
        return BatchResult::empty();
    }

    let options = Arc::new(HostQueryOptions::from_request(&request));
    let total = request.hostnames.len();
    // More permits than hosts never get used
    let concurrency = request.concurrency.clamp(MIN_CONCURRENCY, total);
    let semaphore = init_semaphore(concurrency);
    let start_time = Instant::now();

    info!(
        "Checking {} hostname{} (record types: {}, concurrency: {}, timeout: {}ms)",
        total,
        if total == 1 { "" } else { "s" },
        options
            .record_types
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(","),
        concurrency,
        options.timeout.as_millis()
    );

    let mut tasks = FuturesUnordered::new();

    for hostname in request.hostnames {
        let reported = hostname.trim().to_string();
        let semaphore = Arc::clone(&semaphore);
        let options = Arc::clone(&options);
        let factory = Arc::clone(&factory);

        let handle = tokio::spawn(async move {
            // Hold the permit until the host is resolved
            let Ok(_permit) = semaphore.acquire_owned().await else {
                return HostOutcome::failed(
                    hostname.trim(),
                    HostError::new(LookupErrorKind::TaskCancelled, "worker pool closed"),
                );
            };
            resolve_host(&hostname, &options, factory.as_ref()).await
        });
        tasks.push(async move { (reported, handle.await) });
    }

    let mut results = Vec::with_capacity(total);
    while let Some((hostname, joined)) = tasks.next().await {
        let outcome = match joined {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Resolution task for {hostname} did not complete: {e}");
                HostOutcome::failed(hostname, HostError::from_join_error(&e))
            }
        };
        results.push(outcome);
    }

    let result = BatchResult::from_outcomes(results);
    info!(
        "Resolved {} hostname{} in {:.2}s ({} exist, {} missing)",
        result.summary.total,
        if result.summary.total == 1 { "" } else { "s" },
        start_time.elapsed().as_secs_f64(),
        result.summary.exists,
        result.summary.missing
    );
    result
}

/// Resolves a batch with `hickory-resolver`.
pub async fn resolve_batch_with_hickory(request: BatchRequest) -> BatchResult {
    resolve_batch(request, Arc::new(HickoryResolverFactory)).await
}
