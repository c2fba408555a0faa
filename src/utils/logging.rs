//! Logging - tracing subscriber setup

use std::path::PathBuf;

use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::constants::LOG_FILE_PREFIX;

/// Build a filter from `RUST_LOG`-style directives, `info` when none are given
pub fn parse_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

/// Initialize tracing with console output and, when `log_dir` is given, a
/// daily rolling log file.
///
/// The returned guard must be held until exit or buffered file output is lost.
pub fn init_logging(log_dir: Option<PathBuf>) -> Option<WorkerGuard> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let filter = parse_filter(&directives);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_timer(fmt::time::LocalTime::rfc_3339())
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_timer(fmt::time::LocalTime::rfc_3339()))
        .with(file_layer)
        .init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_info() {
        assert_eq!(parse_filter("").max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn global_level_is_not_overridden() {
        assert_eq!(parse_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(parse_filter("warn").max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn target_directive_raises_max_level() {
        let filter = parse_filter("warn,smite_dashboard=trace");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }
}
