//! Tracing subscriber setup for applications embedding the scraper

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Builds a log filter that shows this crate's events at `level`
///
/// Other crates (reqwest, hyper) stay at `warn` unless `level` is stricter.
pub fn log_filter(level: Level) -> EnvFilter {
    let level = level.as_str().to_ascii_lowercase();
    if level == "error" {
        return EnvFilter::new("error");
    }

    EnvFilter::new(format!("eiga_reviews={},warn", level))
}

/// Installs a global fmt subscriber for the given level
///
/// Returns `false` if a global subscriber was already installed.
pub fn setup_logging(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(level))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .try_init()
        .is_ok()
}
