//! Structured logging with tracing
//!
//! The container only emits events. Hosts that want them on stdout or in a
//! file call [`init_logging`] once at startup.
//!
//! The `WIREBOX_LOG` environment variable accepts full `EnvFilter` directives
//! (`wirebox_infrastructure::di=trace,info`) and takes precedence over the
//! configured level.

use std::ffi::OsStr;
use std::path::Path;

use tracing::{Level, info};
use tracing_appender::rolling::{self, RollingFileAppender};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wirebox_domain::error::{Error, Result};

use crate::constants::{DEFAULT_LOG_FILE_STEM, LOG_FILTER_ENV};

pub use crate::config::LoggingConfig;

/// Install the global subscriber described by `config`.
///
/// Fails when the level is invalid or a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .with_env_var(LOG_FILTER_ENV)
        .from_env_lossy();

    // Exactly one of each pair is set; `Option<Layer>` is itself a layer
    let (stdout_text, stdout_json) = if config.json_format {
        (None, Some(fmt::layer().json().with_target(true)))
    } else {
        (Some(fmt::layer().with_target(true)), None)
    };

    let appender = config.file_output.as_deref().map(daily_appender);
    let (file_text, file_json) = match appender {
        Some(writer) if config.json_format => {
            (None, Some(fmt::layer().json().with_ansi(false).with_writer(writer)))
        }
        Some(writer) => (Some(fmt::layer().with_ansi(false).with_writer(writer)), None),
        None => (None, None),
    };

    Registry::default()
        .with(filter)
        .with(stdout_text)
        .with(stdout_json)
        .with(file_text)
        .with(file_json)
        .try_init()
        .map_err(|e| Error::configuration_with_source("Cannot install log subscriber", e))?;

    info!(%level, json = config.json_format, "Logging initialized");
    Ok(())
}

/// Parse a level name (`trace`, `debug`, `info`, `warn`, `error`), ignoring case
pub fn parse_log_level(level: &str) -> Result<Level> {
    level.trim().parse::<Level>().map_err(|_| {
        Error::configuration(format!(
            "Invalid log level '{level}', expected trace, debug, info, warn or error"
        ))
    })
}

fn daily_appender(path: &Path) -> RollingFileAppender {
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let stem = path
        .file_stem()
        .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE_STEM));

    rolling::daily(directory, stem)
}
