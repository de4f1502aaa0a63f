//! # Open-Port Record Model
//!
//! The unit of data flowing from the result extractor to the report
//! renderer. A scan result is an ordered `Vec<PortRecord>`: insertion order
//! matches the order of appearance in the raw scanner output, and no
//! deduplication or sorting is applied on top of it.

/// A single row of the scanner's port table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortRecord {
    /// Port identifier as printed by the scanner, e.g. `22/tcp`.
    pub port: String,
    /// Reported state, lowercased, e.g. `open`.
    pub state: String,
    /// Service name, e.g. `ssh`.
    pub service: String,
    /// Product/version banner. Empty when the scanner reported none.
    pub version: String,
}

impl PortRecord {
    pub fn new(
        port: impl Into<String>,
        state: impl Into<String>,
        service: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            port: port.into(),
            state: state.into(),
            service: service.into(),
            version: version.into(),
        }
    }

    /// Whether the state is the literal `open`.
    ///
    /// The extractor only ever emits open records, but the renderer styles
    /// non-open states differently and relies on this check.
    pub fn is_open(&self) -> bool {
        self.state == "open"
    }
}
