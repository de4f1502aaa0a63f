use std::path::PathBuf;

/// Filename the report is written to when the caller does not
/// override [`Config::output_path`].
pub const DEFAULT_REPORT_FILENAME: &str = "nmap_report.html";

pub struct Config {
    /// Destination of the generated HTML report.
    ///
    /// Relative paths resolve against the current working directory.
    /// Any existing file at this path is overwritten.
    pub output_path: PathBuf,

    /// Suppresses the startup banner.
    pub no_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_REPORT_FILENAME),
            no_banner: false,
        }
    }
}
