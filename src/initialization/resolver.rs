//! DNS resolver initialization.
//!
//! This module builds `hickory-resolver` instances bound either to a custom
//! nameserver list or to the system configuration, with a single attempt
//! per query and the batch's per-query timeout.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use log::{debug, warn};

use crate::config::DEFAULT_DNS_PORT;
use crate::error_handling::NameserverError;

/// Initializes a DNS resolver for one host task.
///
/// Uses `servers` when the list is non-empty and every entry parses; otherwise
/// logs a warning and uses the system configuration (or hickory's default
/// configuration if the system one cannot be read).
///
/// # Arguments
///
/// * `servers` - Optional custom nameservers (`IP` or `IP:port`)
/// * `timeout` - Per-query timeout
pub fn init_resolver(servers: Option<&[String]>, timeout: Duration) -> TokioAsyncResolver {
    let (config, mut opts) = match servers.filter(|s| !s.is_empty()) {
        Some(servers) => match custom_resolver_config(servers) {
            Ok(config) => (config, ResolverOpts::default()),
            Err(e) => {
                warn!("Ignoring custom nameservers ({e}); using default resolver configuration");
                system_resolver_config()
            }
        },
        None => system_resolver_config(),
    };

    opts.timeout = timeout;
    opts.attempts = 1; // One attempt per query, no retries
    // Set ndots to 0 to prevent search domain appending
    opts.ndots = 0;

    TokioAsyncResolver::tokio(config, opts)
}

/// Builds a resolver configuration that only queries `servers`.
///
/// # Errors
///
/// Returns `NameserverError::InvalidAddress` for the first entry that is not
/// an IP address or socket address.
pub fn custom_resolver_config(servers: &[String]) -> Result<ResolverConfig, NameserverError> {
    let mut group = NameServerConfigGroup::new();
    for server in servers {
        let addr = parse_nameserver(server)?;
        group.merge(NameServerConfigGroup::from_ips_clear(
            &[addr.ip()],
            addr.port(),
            true,
        ));
    }
    Ok(ResolverConfig::from_parts(None, Vec::new(), group))
}

/// Parses `IP`, `[IPv6]` or `IP:port`; the port defaults to 53.
pub fn parse_nameserver(raw: &str) -> Result<SocketAddr, NameserverError> {
    let trimmed = raw.trim();
    if let Ok(addr) = trimmed.parse::<SocketAddr>() {
        return Ok(addr);
    }
    let bare = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);
    bare.parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DEFAULT_DNS_PORT))
        .map_err(|_| NameserverError::InvalidAddress(raw.to_string()))
}

fn system_resolver_config() -> (ResolverConfig, ResolverOpts) {
    match hickory_resolver::system_conf::read_system_conf() {
        Ok(system) => system,
        Err(e) => {
            debug!("Failed to read system resolver configuration ({e}); using defaults");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    }
}
