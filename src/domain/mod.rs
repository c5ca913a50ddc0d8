//! Hostname normalization.
//!
//! Hostnames are queried in their ASCII-compatible (IDNA/punycode) form but
//! reported as the caller wrote them.

use idna::AsciiDenyList;
use log::debug;

/// Converts a trimmed hostname to the ASCII form used on the wire.
///
/// Internationalized labels are punycode-encoded and the name is lowercased.
/// Numeric labels are left alone: `1.2.3` stays `1.2.3`.
///
/// # Errors
///
/// Returns the IDNA errors when the name contains forbidden characters or
/// fails UTS #46 processing.
pub fn to_ascii_hostname(hostname: &str) -> Result<String, idna::Errors> {
    idna::domain_to_ascii_cow(hostname.as_bytes(), AsciiDenyList::URL)
        .map(|ascii| ascii.into_owned())
}

/// Returns the query form of `hostname`.
///
/// Trims the input and IDNA-encodes it; when encoding fails the trimmed
/// input is used as is.
pub fn encode_hostname(hostname: &str) -> String {
    let trimmed = hostname.trim();
    match to_ascii_hostname(trimmed) {
        Ok(ascii) => ascii,
        Err(e) => {
            debug!("IDNA encoding failed for {trimmed:?} ({e}); querying it unchanged");
            trimmed.to_string()
        }
    }
}
