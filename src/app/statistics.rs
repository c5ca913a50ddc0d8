//! Statistics printing.

use std::collections::HashMap;

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::LookupErrorKind;
use crate::models::{HostOutcome, Summary};

/// Counts of captured host errors, by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorStatistics {
    counts: HashMap<LookupErrorKind, usize>,
}

impl ErrorStatistics {
    /// Tallies the `error` field of every outcome.
    pub fn from_outcomes(outcomes: &[HostOutcome]) -> Self {
        let mut counts = HashMap::new();
        for error in outcomes.iter().filter_map(|o| o.error.as_ref()) {
            *counts.entry(error.kind).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of hosts whose captured error has `kind`.
    pub fn get_count(&self, kind: LookupErrorKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Number of hosts with a captured error.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Prints error counts to the log, one line per kind seen.
pub fn print_error_statistics(stats: &ErrorStatistics) {
    let total = stats.total();
    if total == 0 {
        return;
    }
    info!("Error Counts ({} total):", total);
    for kind in LookupErrorKind::iter() {
        let count = stats.get_count(kind);
        if count > 0 {
            info!("   {}: {}", kind.as_str(), count);
        }
    }
}

/// Prints a one-line summary of the batch.
pub fn print_summary(summary: &Summary, elapsed_seconds: f64) {
    info!(
        "✅ Checked {} hostname{} ({} exist, {} missing) in {:.1}s",
        summary.total,
        if summary.total == 1 { "" } else { "s" },
        summary.exists,
        summary.missing,
        elapsed_seconds
    );
}
