/// Structured logging setup for the binaries.
///
/// Lines look like `2024-05-01 13:37:00  INFO Moved a.txt to txt/a.txt` and
/// go to stderr, leaving stdout for reports.
use std::fmt;
use tracing::Level;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// Timestamp layout used in every log line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Local wall-clock timer at second precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format(TIMESTAMP_FORMAT))
    }
}

/// Install the global subscriber. INFO by default, DEBUG when `verbose`.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_timer(LocalTimer)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
