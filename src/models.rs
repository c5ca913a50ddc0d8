//! Batch request, per-host outcome and batch result.

use serde::Serialize;

use crate::config::{DEFAULT_CONCURRENCY, DEFAULT_RECORD_TYPES, DEFAULT_TIMEOUT_MS};
use crate::dns::RecordType;
use crate::error_handling::HostError;

/// Input of one batch.
///
/// All fields but `hostnames` have defaults (see [`Default`]). Record types
/// are normalized and the numeric options clamped when the batch runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    /// Hostnames to check, in submission order (duplicates allowed)
    pub hostnames: Vec<String>,
    /// Record type tags queried for each host, in order
    pub record_types: Vec<String>,
    /// Per-query timeout in milliseconds (floor 100)
    pub timeout_ms: u64,
    /// Maximum number of hosts resolved at once (floor 1)
    pub concurrency: usize,
    /// Custom nameservers (`IP` or `IP:port`); `None` uses the system configuration
    pub servers: Option<Vec<String>>,
    /// Stop querying a host after the first matching type (only with `require_any`)
    pub fast: bool,
    /// `true`: any matching type makes a host exist; `false`: every type must match
    pub require_any: bool,
}

impl Default for BatchRequest {
    fn default() -> Self {
        Self {
            hostnames: Vec::new(),
            record_types: DEFAULT_RECORD_TYPES.iter().map(|t| t.to_string()).collect(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            concurrency: DEFAULT_CONCURRENCY,
            servers: None,
            fast: false,
            require_any: true,
        }
    }
}

impl BatchRequest {
    /// Creates a request for `hostnames` with default options.
    pub fn new<I, S>(hostnames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hostnames: hostnames.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

/// One answer value, tagged with the record type that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerRecord {
    /// Record type queried
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Textual answer (address, target name, ...)
    pub value: String,
}

/// Result of resolving one hostname.
///
/// `error` is always `None` when `exists` is true. A host may also have
/// `exists == false` and no error, when every type cleanly had no records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostOutcome {
    /// Hostname as submitted (trimmed, before IDNA encoding)
    pub hostname: String,
    /// Whether the host exists under the batch's existence policy
    pub exists: bool,
    /// Record types that returned at least one value, in query order
    pub matched_types: Vec<RecordType>,
    /// Every answer value, in query order
    pub records: Vec<AnswerRecord>,
    /// First lookup error, if the host does not exist
    pub error: Option<HostError>,
}

impl HostOutcome {
    /// Outcome for a host whose task ended without producing one.
    pub fn failed(hostname: impl Into<String>, error: HostError) -> Self {
        Self {
            hostname: hostname.into(),
            exists: false,
            matched_types: Vec::new(),
            records: Vec::new(),
            error: Some(error),
        }
    }
}

/// Aggregate counts for a batch; `exists + missing == total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of outcomes
    pub total: usize,
    /// Outcomes with `exists == true`
    pub exists: usize,
    /// Outcomes with `exists == false`
    pub missing: usize,
}

impl Summary {
    /// Counts existing and missing hosts.
    pub fn from_outcomes(outcomes: &[HostOutcome]) -> Self {
        let total = outcomes.len();
        let exists = outcomes.iter().filter(|o| o.exists).count();
        Self {
            total,
            exists,
            missing: total - exists,
        }
    }
}

/// Outcomes of a batch, in completion order, plus their summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    /// Per-host outcomes in the order their tasks completed
    pub results: Vec<HostOutcome>,
    /// Aggregate counts
    pub summary: Summary,
}

impl BatchResult {
    /// The result of a batch with no hostnames.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a result and its summary from collected outcomes.
    pub fn from_outcomes(results: Vec<HostOutcome>) -> Self {
        let summary = Summary::from_outcomes(&results);
        Self { results, summary }
    }
}
