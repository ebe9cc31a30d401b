//! Diagnostics setup for `mst-repair`.
//!
//! Repair reports go to stdout; everything emitted through `tracing` or the
//! `log` facade goes to stderr. `RUST_LOG` picks the level (default `info`)
//! and `MST_REPAIR_LOG_FORMAT` picks `human` or `json` lines.

use std::{env, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

const LOG_FORMAT_ENV: &str = "MST_REPAIR_LOG_FORMAT";
const DEFAULT_DIRECTIVE: &str = "info";

static INITIALISED: OnceLock<()> = OnceLock::new();

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum LogFormat {
    Human,
    Json,
}

impl LogFormat {
    fn from_env() -> Result<Self, LoggingError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => parse_log_format(&raw),
            Err(env::VarError::NotPresent) => Ok(Self::Human),
            Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
                name: LOG_FORMAT_ENV,
                source,
            }),
        }
    }
}

/// Reasons `mst-repair` could not set up its diagnostics.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `MST_REPAIR_LOG_FORMAT` held bytes that are not UTF-8.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// The variable that was read.
        name: &'static str,
        /// Lookup failure reported by the standard library.
        #[source]
        source: env::VarError,
    },
    /// `MST_REPAIR_LOG_FORMAT` named neither `human` nor `json`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// The value after trimming and lower-casing.
        provided: String,
    },
    /// The global subscriber slot was already taken.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Routes repair diagnostics to stderr for the rest of the process.
///
/// Closed spans such as `cli.run`, `graph.build_mst` and `mst.repair` are
/// logged with their timings. Calling this more than once, or after another
/// subscriber has been installed, leaves the existing setup in place.
///
/// # Errors
/// Returns [`LoggingError::InvalidUnicode`] or
/// [`LoggingError::UnsupportedFormat`] when `MST_REPAIR_LOG_FORMAT` cannot
/// be used.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    match install_subscriber(LogFormat::from_env()?) {
        Ok(()) | Err(LoggingError::InstallFailed { .. }) => {}
        Err(err) => return Err(err),
    }
    let _ = INITIALISED.set(());
    Ok(())
}

fn install_subscriber(format: LogFormat) -> Result<(), LoggingError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let stderr_layer = match format {
        LogFormat::Json => stderr_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
        LogFormat::Human => stderr_layer.boxed(),
    };

    // A `log` logger installed by an embedding process stays in charge.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}

fn parse_log_format(raw: &str) -> Result<LogFormat, LoggingError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "human" => Ok(LogFormat::Human),
        "json" => Ok(LogFormat::Json),
        other => Err(LoggingError::UnsupportedFormat {
            provided: other.to_owned(),
        }),
    }
}
