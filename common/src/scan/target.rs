//! # Scan Target Model
//!
//! A target is whatever string the user handed us: a hostname, an IPv4 or
//! IPv6 address, or anything else. It is passed to the external scanner
//! verbatim. No validation and no normalization happen here; if the string
//! names nothing reachable, the scan simply produces no port table.

use std::fmt;

/// The host or address string the external scan is run against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanTarget(String);

impl ScanTarget {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScanTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScanTarget {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
