//! Logging setup for the PromptDeck backend.
//!
//! All crates log through `tracing` macros; this module installs the global
//! subscriber once at startup.

use promptdeck_config::LoggingConfig;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// File name prefix for the rolling log file.
const LOG_FILE_PREFIX: &str = "promptdeck.log";

/// Initialize logging from the `logging` config section.
///
/// When `directory` is set, a daily rolling file is written next to stdout.
/// The returned guard flushes the file writer and must be kept alive for the
/// lifetime of the process.
pub fn init_with_config(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = build_filter(&config.level);

    match config.directory.as_deref() {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            let result = tracing_subscriber::registry()
                .with(stdout_layer())
                .with(fmt::layer().with_ansi(false).with_target(true).with_writer(writer))
                .with(filter)
                .try_init();

            if result.is_ok() {
                info!(
                    "Logging initialized at level '{}', writing to {}",
                    config.level, directory
                );
            }
            Some(guard)
        }
        None => {
            let result = tracing_subscriber::registry()
                .with(stdout_layer())
                .with(filter)
                .try_init();

            if result.is_ok() {
                info!("Logging initialized at level '{}'", config.level);
            }
            None
        }
    }
}

fn stdout_layer<S>() -> impl tracing_subscriber::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_thread_names(true)
}

/// `RUST_LOG` plus a `promptdeck=<level>` directive.
/// An unparseable level falls back to `info`.
fn build_filter(level: &str) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match format!("promptdeck={}", level).parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter.add_directive(tracing::Level::INFO.into()),
    }
}
