//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_CONCURRENCY, DEFAULT_RECORD_TYPES, DEFAULT_TIMEOUT_MS};
use crate::models::BatchRequest;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Exit code policy applied after the batch completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 once the batch has run
    Never,
    /// Exit 2 when at least one hostname does not exist
    AnyMissing,
}

/// Command-line configuration.
///
/// Hostnames can be passed positionally, read from `--file`, or both; the
/// positional ones come first in the batch.
///
/// # Examples
///
/// ```no_run
/// use domain_exists::Config;
///
/// let config = Config {
///     hostnames: vec!["example.com".to_string()],
///     concurrency: 50,
///     ..Default::default()
/// };
/// let request = config.to_request(config.hostnames.clone());
/// assert!(request.require_any);
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain_exists",
    version,
    about = "Checks in bulk whether hostnames resolve in DNS"
)]
pub struct Config {
    /// Hostnames to check
    pub hostnames: Vec<String>,

    /// File with one hostname per line ("-" reads from stdin)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Record types to query, in order (comma-separated)
    #[arg(long, value_delimiter = ',', default_values = ["A", "AAAA", "CNAME"])]
    pub record_types: Vec<String>,

    /// Per-query timeout in milliseconds (values below 100 are raised to 100)
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Maximum number of hostnames resolved concurrently
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Custom nameserver (IP or IP:port); repeat for several
    #[arg(long = "nameserver", value_name = "ADDR")]
    pub nameservers: Vec<String>,

    /// Stop querying a host after its first matching record type
    #[arg(long)]
    pub fast: bool,

    /// Require every record type to resolve instead of any one of them
    #[arg(long)]
    pub require_all: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Exit code policy
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,

    /// Pretty-print the JSON result
    #[arg(long)]
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hostnames: Vec::new(),
            file: None,
            record_types: DEFAULT_RECORD_TYPES.iter().map(|t| t.to_string()).collect(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            concurrency: DEFAULT_CONCURRENCY,
            nameservers: Vec::new(),
            fast: false,
            require_all: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            fail_on: FailOn::Never,
            pretty: false,
        }
    }
}

impl Config {
    /// Builds the batch request for `hostnames` from the configured options.
    ///
    /// An empty nameserver list means "use the system resolver configuration".
    pub fn to_request(&self, hostnames: Vec<String>) -> BatchRequest {
        BatchRequest {
            hostnames,
            record_types: self.record_types.clone(),
            timeout_ms: self.timeout_ms,
            concurrency: self.concurrency,
            servers: if self.nameservers.is_empty() {
                None
            } else {
                Some(self.nameservers.clone())
            },
            fast: self.fast,
            require_any: !self.require_all,
        }
    }
}
