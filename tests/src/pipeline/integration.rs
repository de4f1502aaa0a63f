#![cfg(test)]
use scanview_common::scan::record::PortRecord;
use scanview_common::scan::target::ScanTarget;
use scanview_core::{extractor, report};

/// A realistic capture of nmap stdout, including the banner lines before
/// the table and the footer after it.
const RAW_OUTPUT: &str = "\
Starting Nmap 7.94SVN ( https://nmap.org ) at 2026-08-29 10:12 CEST
Nmap scan report for 10.0.0.5
Host is up (0.00094s latency).
Not shown: 65530 closed tcp ports (reset)
PORT     STATE    SERVICE VERSION
22/tcp   open     ssh     OpenSSH 9.6p1 Ubuntu 3ubuntu13
80/tcp   open     http    Apache httpd 2.4.58
139/tcp  filtered netbios-ssn
443/tcp  open     https   nginx 1.24.0
3306/tcp closed   mysql

Nmap done: 1 IP address (1 host up) scanned in 12.41 seconds
";

/// Extraction and rendering back to back, the way the CLI drives them.
#[test]
fn extract_then_render_full_output() {
    let target = ScanTarget::new("10.0.0.5");
    let records = extractor::extract(RAW_OUTPUT);

    assert_eq!(
        records,
        vec![
            PortRecord::new("22/tcp", "open", "ssh", "OpenSSH 9.6p1 Ubuntu 3ubuntu13"),
            PortRecord::new("80/tcp", "open", "http", "Apache httpd 2.4.58"),
            PortRecord::new("443/tcp", "open", "https", "nginx 1.24.0"),
        ]
    );

    let html = report::render(&target, &records);
    assert!(html.contains("Total open ports detected: <strong>3</strong>"));
    assert!(html.contains("OpenSSH 9.6p1 Ubuntu 3ubuntu13"));
    assert!(!html.contains("filtered"));
    assert!(!html.contains("mysql"));

    // Row order follows the raw output.
    let ssh = html.find("22/tcp").unwrap();
    let http = html.find("80/tcp").unwrap();
    let https = html.find("443/tcp").unwrap();
    assert!(ssh < http && http < https);
}

#[test]
fn written_report_round_trips_through_disk() -> anyhow::Result<()> {
    let target = ScanTarget::new("10.0.0.5");
    let records = extractor::extract(RAW_OUTPUT);
    let path = std::env::temp_dir().join("scanview_pipeline_integration.html");

    report::write(&path, &target, &records)?;
    let contents = std::fs::read_to_string(&path)?;
    assert!(contents.starts_with("<!DOCTYPE html>"));
    assert!(contents.contains("Scanned host: <strong>10.0.0.5</strong>"));

    std::fs::remove_file(&path)?;
    Ok(())
}

/// A failed or empty scan produces no records, which is the condition the
/// CLI uses to skip report generation entirely.
#[test]
fn garbled_output_yields_the_empty_result_path() {
    assert!(extractor::extract("").is_empty());
    assert!(extractor::extract("Failed to resolve \"nosuchhost\".\n").is_empty());
}
