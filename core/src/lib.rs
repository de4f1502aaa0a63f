//! The scan pipeline: invoke the external scanner, extract open-port
//! records from its output, render them into an HTML report.
//!
//! The three stages are strictly sequential and each one is a plain
//! function; orchestration lives in the CLI.

pub mod extractor;
pub mod invoker;
pub mod report;
