//! Record type tags and their normalization.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::config::DEFAULT_RECORD_TYPES;

/// Upper-case DNS record type tag such as `A`, `AAAA` or `MX`.
///
/// Any ASCII alphanumeric tag is accepted here; whether the resolver knows
/// the type is decided at lookup time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordType(String);

impl RecordType {
    /// Parses a tag: trims, upper-cases and checks the characters.
    ///
    /// Returns `None` for an empty tag or one with characters other than
    /// ASCII letters and digits.
    pub fn parse(raw: &str) -> Option<Self> {
        let tag = raw.trim().to_ascii_uppercase();
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        Some(Self(tag))
    }

    /// The tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The default query set: A, AAAA, CNAME.
    pub fn defaults() -> Vec<Self> {
        DEFAULT_RECORD_TYPES
            .iter()
            .map(|tag| Self(tag.to_string()))
            .collect()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalizes requested record types, keeping their order.
///
/// Entries are trimmed and upper-cased; blank entries are dropped and
/// repeated tags keep their first position. If any entry is not a valid tag,
/// or nothing is left, the default set is returned instead.
pub fn normalize_record_types<S: AsRef<str>>(raw: &[S]) -> Vec<RecordType> {
    let mut normalized: Vec<RecordType> = Vec::with_capacity(raw.len());
    for entry in raw {
        let entry = entry.as_ref();
        if entry.trim().is_empty() {
            continue;
        }
        let Some(record_type) = RecordType::parse(entry) else {
            debug!("Invalid record type {entry:?}, using default record types");
            return RecordType::defaults();
        };
        if !normalized.contains(&record_type) {
            normalized.push(record_type);
        }
    }
    if normalized.is_empty() {
        return RecordType::defaults();
    }
    normalized
}
