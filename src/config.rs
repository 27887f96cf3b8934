//! Run configuration for the `slideshow` binary.
//!
//! Environment variables:
//! - `SLIDESHOW_INPUT`: input listing path
//! - `SLIDESHOW_OUTPUT`: output listing path
//! - `SLIDESHOW_UNPAIRED`: `drop` (default) or `promote`
//! - `SLIDESHOW_SCAN`: `buckets` (default) or `early-exit`
//! - `SLIDESHOW_PROGRESS`: progress log interval in slides (default: 100, 0 disables)
//! - `LOG_FORMAT`: "json" for structured logs, "pretty" for development (default: pretty)
//!
//! Positional arguments `<input> <output>` override the path variables.

use std::path::PathBuf;

use crate::policy::{RestrictedScan, SequencePolicyV1, UnpairedHalf};

/// Error type for configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required setting is absent.
    #[error("Missing {what}: pass it as an argument or set {var}")]
    Missing {
        /// Human name of the setting.
        what: &'static str,
        /// Environment variable that supplies it.
        var: &'static str,
    },
    /// A setting has an unrecognised value.
    #[error("Invalid value {value:?} for {var}")]
    Invalid {
        /// Environment variable.
        var: &'static str,
        /// Offending value.
        value: String,
    },
    /// More positional arguments than `<input> <output>`.
    #[error("Unexpected argument {0:?}, usage: slideshow [input] [output]")]
    UnexpectedArgument(String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable.
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Resolved configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Input listing path.
    pub input: PathBuf,
    /// Output listing path.
    pub output: PathBuf,
    /// Sequencing policy.
    pub policy: SequencePolicyV1,
    /// Log output format.
    pub log_format: LogFormat,
}

impl RunConfig {
    /// Resolve from the process environment and command line.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(|var| std::env::var(var).ok(), std::env::args().skip(1))
    }

    /// Resolve from an arbitrary variable lookup and argument list.
    pub fn resolve(
        lookup: impl Fn(&str) -> Option<String>,
        args: impl IntoIterator<Item = String>,
    ) -> Result<Self, ConfigError> {
        let mut args = args.into_iter();
        let input = args.next().or_else(|| lookup("SLIDESHOW_INPUT"));
        let output = args.next().or_else(|| lookup("SLIDESHOW_OUTPUT"));
        if let Some(extra) = args.next() {
            return Err(ConfigError::UnexpectedArgument(extra));
        }

        let input = input.ok_or(ConfigError::Missing {
            what: "input path",
            var: "SLIDESHOW_INPUT",
        })?;
        let output = output.ok_or(ConfigError::Missing {
            what: "output path",
            var: "SLIDESHOW_OUTPUT",
        })?;

        let mut policy = SequencePolicyV1::default();
        if let Some(value) = lookup("SLIDESHOW_UNPAIRED") {
            policy.unpaired_half = UnpairedHalf::from_str(&value).ok_or(ConfigError::Invalid {
                var: "SLIDESHOW_UNPAIRED",
                value,
            })?;
        }
        if let Some(value) = lookup("SLIDESHOW_SCAN") {
            policy.restricted_scan = RestrictedScan::from_str(&value).ok_or(ConfigError::Invalid {
                var: "SLIDESHOW_SCAN",
                value,
            })?;
        }
        if let Some(value) = lookup("SLIDESHOW_PROGRESS") {
            policy.progress_interval = value.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "SLIDESHOW_PROGRESS",
                value,
            })?;
        }

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
            policy,
            log_format,
        })
    }
}
