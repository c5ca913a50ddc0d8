//! Error type definitions.
//!
//! This module defines the per-lookup error taxonomy, the description captured
//! into a host outcome, and initialization errors.

use std::fmt;
use std::time::Duration;

use log::SetLoggerError;
use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;
use tokio::task::JoinError;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error for a custom nameserver entry that cannot be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameserverError {
    /// The entry is neither an IP address nor an `IP:port` socket address.
    #[error("invalid nameserver address '{0}'")]
    InvalidAddress(String),
}

/// Category of a failed lookup (or of a task fault).
///
/// The label returned by [`LookupErrorKind::as_str`] prefixes every captured
/// error description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum LookupErrorKind {
    /// The queried name does not exist.
    NxDomain,
    /// No answer within the per-query timeout.
    Timeout,
    /// The server reported a failure (SERVFAIL and other error codes).
    ServerFailure,
    /// The server refused the query.
    Refused,
    /// No usable connection to a nameserver.
    Transport,
    /// Malformed or otherwise invalid DNS message.
    Protocol,
    /// The record type tag is not known to the resolver.
    UnsupportedRecordType,
    /// The host task panicked.
    TaskPanicked,
    /// The host task was cancelled before finishing.
    TaskCancelled,
    /// Anything else.
    Other,
}

impl LookupErrorKind {
    /// Stable label used in error descriptions and statistics.
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupErrorKind::NxDomain => "NXDOMAIN",
            LookupErrorKind::Timeout => "Timeout",
            LookupErrorKind::ServerFailure => "ServerFailure",
            LookupErrorKind::Refused => "Refused",
            LookupErrorKind::Transport => "Transport",
            LookupErrorKind::Protocol => "Protocol",
            LookupErrorKind::UnsupportedRecordType => "UnsupportedRecordType",
            LookupErrorKind::TaskPanicked => "TaskPanicked",
            LookupErrorKind::TaskCancelled => "TaskCancelled",
            LookupErrorKind::Other => "Other",
        }
    }
}

impl fmt::Display for LookupErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a single lookup (one name, one record type).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The name does not exist (NXDOMAIN).
    #[error("domain name does not exist")]
    NxDomain,

    /// No answer arrived within the timeout.
    #[error("lookup timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// The server answered with an error response code.
    #[error("server failure (response code {0})")]
    ServerFailure(String),

    /// The server refused to answer.
    #[error("query refused by server")]
    Refused,

    /// Network-level failure reaching the nameserver.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response could not be parsed or the query could not be built.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The record type tag is not supported by the resolver.
    #[error("unsupported record type {0}")]
    UnsupportedRecordType(String),

    /// Unclassified resolver failure.
    #[error("{0}")]
    Other(String),
}

impl LookupError {
    /// Returns the category of this error.
    pub fn kind(&self) -> LookupErrorKind {
        match self {
            LookupError::NxDomain => LookupErrorKind::NxDomain,
            LookupError::Timeout(_) => LookupErrorKind::Timeout,
            LookupError::ServerFailure(_) => LookupErrorKind::ServerFailure,
            LookupError::Refused => LookupErrorKind::Refused,
            LookupError::Transport(_) => LookupErrorKind::Transport,
            LookupError::Protocol(_) => LookupErrorKind::Protocol,
            LookupError::UnsupportedRecordType(_) => LookupErrorKind::UnsupportedRecordType,
            LookupError::Other(_) => LookupErrorKind::Other,
        }
    }

    /// True for an authoritative "this name does not exist" answer.
    ///
    /// A negative answer means the record type did not match; it is not
    /// captured as a host error.
    pub fn is_negative_answer(&self) -> bool {
        matches!(self, LookupError::NxDomain)
    }
}

/// Error description captured into a [`HostOutcome`](crate::HostOutcome).
///
/// Serializes as the string `"<kind>: <message>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct HostError {
    /// Error category
    pub kind: LookupErrorKind,
    /// Human-readable description
    pub message: String,
}

impl HostError {
    /// Creates a description from its parts.
    pub fn new(kind: LookupErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Describes a host task that ended without producing an outcome.
    pub fn from_join_error(error: &JoinError) -> Self {
        let kind = if error.is_panic() {
            LookupErrorKind::TaskPanicked
        } else {
            LookupErrorKind::TaskCancelled
        };
        Self::new(kind, error.to_string())
    }
}

impl From<&LookupError> for HostError {
    fn from(error: &LookupError) -> Self {
        Self::new(error.kind(), error.to_string())
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl From<HostError> for String {
    fn from(error: HostError) -> Self {
        error.to_string()
    }
}
