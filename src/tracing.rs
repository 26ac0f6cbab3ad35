//! Logging setup and caret diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs, one line per edit cycle
//! - `RUST_LOG=formula_input::model=trace` - cycle state transitions
//!
//! # Log Files
//!
//! Logs are written to `~/.config/formula-input/logs/formula.log` with daily
//! rotation. File logging uses debug level by default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editable::CaretSelection;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`) and goes to stderr so
/// it never mixes with highlighted output on stdout.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender =
                tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_NAME);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Describe how a caret moved across a cycle, `None` when it did not
pub fn caret_diff(before: Option<CaretSelection>, after: Option<CaretSelection>) -> Option<String> {
    if before == after {
        return None;
    }

    let show = |caret: Option<CaretSelection>| match caret {
        Some(c) if c.is_collapsed() => format!("{}", c.start),
        Some(c) => format!("{}..{}", c.start, c.end),
        None => "none".to_string(),
    };

    Some(format!("caret: {} → {}", show(before), show(after)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_diff() {
        let a = Some(CaretSelection::collapsed(1));
        let b = Some(CaretSelection::new(1, 4));
        assert_eq!(caret_diff(a, a), None);
        assert_eq!(caret_diff(a, b).as_deref(), Some("caret: 1 → 1..4"));
        assert_eq!(caret_diff(None, a).as_deref(), Some("caret: none → 1"));
    }
}
