use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Shown while the blocking scan runs. Presentation only; the tick
/// thread owns no pipeline state.
pub fn start_scan_spinner(target: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap()
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!(
        "Running nmap against {}, a full-port scan can take a while...",
        target.bold().green()
    ));
    pb
}
