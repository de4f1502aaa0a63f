//! The single interactive prompt.
//!
//! The entered string is trimmed and otherwise taken as-is; validation is
//! deliberately absent, an unreachable target just yields an empty scan.

use std::io::{self, Write};

use colored::*;
use scanview_common::scan::target::ScanTarget;

pub fn read_target() -> io::Result<ScanTarget> {
    print!("{} ", "Enter the IP or domain to scan:".bold());
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(ScanTarget::new(line.trim()))
}
