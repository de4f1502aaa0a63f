//! Renders extracted records into a static, self-contained HTML report
//! and persists it to disk.
//!
//! Rendering is write-only: the document is never re-ingested, so the
//! markup favors readability in a browser over machine parsing. All
//! record values are HTML-escaped before insertion.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use chrono::Local;
use scanview_common::error::ReportError;
use scanview_common::scan::record::PortRecord;
use scanview_common::scan::target::ScanTarget;
use tracing::debug;

/// Renders the report and writes it to `path`, overwriting any existing
/// file. UTF-8, one file, no partial-write recovery.
pub fn write(path: &Path, target: &ScanTarget, records: &[PortRecord]) -> Result<(), ReportError> {
    let html = render(target, records);
    fs::write(path, &html).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("wrote {} bytes to {}", html.len(), path.display());
    Ok(())
}

/// Builds the complete HTML document for `records`.
///
/// The generation timestamp is taken at render time, in local time. A
/// zero-record input still yields a well-formed document with an empty
/// table; the caller is expected to guard that case before writing.
pub fn render(target: &ScanTarget, records: &[PortRecord]) -> String {
    let mut out = String::with_capacity(8_192);
    // Writes into a String cannot fail.
    let _ = write_document(&mut out, target, records);
    out
}

fn write_document(
    out: &mut String,
    target: &ScanTarget,
    records: &[PortRecord],
) -> std::fmt::Result {
    let generated = Local::now().format("%Y-%m-%d %H:%M:%S");
    let escaped_target = html_escape(target.as_str());

    // --- head ---
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"UTF-8\" />\n");
    writeln!(out, "<title>Nmap Scan Report - {escaped_target}</title>")?;
    write_css(out);
    out.push_str("</head>\n<body>\n");

    // --- heading and summary lines ---
    out.push_str("<h1>Nmap Scan Report</h1>\n");
    writeln!(
        out,
        "<p class=\"info\">Scanned host: <strong>{escaped_target}</strong> | Generated: {generated}</p>",
    )?;
    writeln!(
        out,
        "<p class=\"info\">Total open ports detected: <strong>{}</strong></p>",
        records.len(),
    )?;

    // --- port table ---
    out.push_str("<table>\n<thead>\n<tr>");
    out.push_str("<th>Port</th><th>State</th><th>Service</th><th>Version</th>");
    out.push_str("</tr>\n</thead>\n<tbody>\n");
    for record in records {
        writeln!(
            out,
            "<tr><td>{}</td><td class=\"{}\">{}</td><td>{}</td><td>{}</td></tr>",
            html_escape(&record.port),
            state_class(record),
            html_escape(&record.state),
            html_escape(&record.service),
            html_escape(&record.version),
        )?;
    }
    out.push_str("</tbody>\n</table>\n");

    // --- footer ---
    out.push_str("<footer>Report generated automatically with Nmap</footer>\n");
    out.push_str("</body>\n</html>\n");
    Ok(())
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// CSS class for the State cell.
///
/// The extractor only hands us open records today, but the non-open
/// styling stays so records from other sources render sensibly.
fn state_class(record: &PortRecord) -> &'static str {
    if record.is_open() {
        "state-open"
    } else {
        "state-closed"
    }
}

fn write_css(out: &mut String) {
    out.push_str("<style>\n");
    out.push_str(
        "body{font-family:'Segoe UI',Tahoma,Geneva,Verdana,sans-serif;margin:30px auto;max-width:900px;background:#f7f9fc;color:#222}\n\
         h1{color:#2a4365;text-align:center;margin-bottom:5px}\n\
         .info{text-align:center;margin-bottom:20px;font-size:1rem;color:#555}\n\
         table{width:100%;border-collapse:collapse;box-shadow:0 0 10px rgba(0,0,0,0.1);background:white}\n\
         th,td{padding:12px 15px;border:1px solid #ddd;text-align:left}\n\
         th{background-color:#2a4365;color:white;text-transform:uppercase;font-size:0.9rem}\n\
         tr:nth-child(even){background-color:#f2f6fa}\n\
         .state-open{color:#2e7d32;font-weight:bold}\n\
         .state-closed{color:#c62828;font-weight:bold}\n\
         footer{margin-top:25px;font-size:0.8rem;text-align:center;color:#777;font-style:italic}\n",
    );
    out.push_str("</style>\n");
}
