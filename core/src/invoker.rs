//! Runs the external nmap process and captures its standard output.
//!
//! This stage is a thin, blocking wrapper around [`std::process::Command`]:
//! one child process per invocation, fully awaited before anything is
//! parsed. The exit status and stderr are logged but never turned into
//! errors; a scan that ran and failed is indistinguishable from a scan
//! that found nothing, and both end in the "no open ports" path.

use std::process::Command;

use scanview_common::error::InvokeError;
use scanview_common::scan::target::ScanTarget;
use tracing::{debug, warn};

const NMAP_BIN: &str = "nmap";

/// All TCP ports, SYN scan with default scripts and version probes,
/// no DNS resolution, host treated as up without a liveness probe.
const NMAP_ARGS: &[&str] = &["-p-", "-sSCV", "-n", "-Pn"];

/// Executes the fixed scan command against `target` and returns the
/// captured stdout, lossily decoded as UTF-8.
///
/// The only error is a spawn failure (typically: nmap not installed).
pub fn run_scan(target: &ScanTarget) -> Result<String, InvokeError> {
    debug!("spawning: {} {} {}", NMAP_BIN, NMAP_ARGS.join(" "), target);

    let output = Command::new(NMAP_BIN)
        .args(NMAP_ARGS)
        .arg(target.as_str())
        .output()
        .map_err(|source| InvokeError::Spawn {
            command: NMAP_BIN.to_string(),
            source,
        })?;

    if !output.status.success() {
        warn!("{} exited with {}", NMAP_BIN, output.status);
    }
    if !output.stderr.is_empty() {
        debug!(
            "{} stderr: {}",
            NMAP_BIN,
            String::from_utf8_lossy(&output.stderr).trim_end()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
