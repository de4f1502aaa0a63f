use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Raised when the external scanner process cannot be started at all.
///
/// A scan that starts but fails (non-zero exit, garbled output) is *not*
/// an error: it flows downstream as empty or partial output and ends in
/// the "no open ports" advisory.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Raised when the rendered report cannot be persisted to disk.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report to '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
