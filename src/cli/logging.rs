//! Logger setup for the command line

use chrono::Local;
use log::LevelFilter;
use std::io::Write;

/// Resolve the log level: explicit value, then `RUST_LOG`, then `info`
pub fn resolve_level(level: Option<&str>) -> LevelFilter {
    level
        .and_then(|l| l.parse::<LevelFilter>().ok())
        .or_else(|| std::env::var("RUST_LOG").ok().and_then(|v| v.parse().ok()))
        .unwrap_or(LevelFilter::Info)
}

/// Install `env_logger` with `[HH:MM:SS LEVEL] message` lines on stderr
///
/// Calling it a second time leaves the first logger in place.
pub fn init_logging(level: Option<&str>) {
    let log_level = resolve_level(level);
    let installed = env_logger::Builder::new()
        .filter_level(log_level)
        .format(|buf, record| {
            writeln!(buf, "[{} {:5}] {}", Local::now().format("%H:%M:%S"), record.level(), record.args())
        })
        .try_init()
        .is_ok();

    if installed {
        log::debug!("Logger initialized (level: {})", log_level);
    }
}
