mod prompt;
mod terminal;

use anyhow::Context;
use scanview_common::config::Config;
use scanview_core::{extractor, invoker, report};
use tracing::{info, warn};

use crate::terminal::{logging, print, spinner};

fn main() -> anyhow::Result<()> {
    logging::init();

    let cfg = Config::default();
    print::banner(cfg.no_banner);
    print::header("nmap scan to html report");

    let target = prompt::read_target().context("failed to read target from stdin")?;
    print::aligned_line("Target", target.as_str());
    print::aligned_line("Output", &cfg.output_path.display().to_string());

    let pb = spinner::start_scan_spinner(target.as_str());
    let raw = invoker::run_scan(&target);
    pb.finish_and_clear();
    let raw = raw?;

    let records = extractor::extract(&raw);
    if records.is_empty() {
        warn!("No open ports were found, or the scan output could not be interpreted.");
        return Ok(());
    }

    report::write(&cfg.output_path, &target, &records)?;
    info!(
        "Report with {} open ports generated at '{}'. Open it in your browser.",
        records.len(),
        cfg.output_path.display(),
    );
    Ok(())
}
