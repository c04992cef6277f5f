//! Log severity names and their (severity, verbosity) encoding.
//!
//! The management interface exposes a syslog-style severity name while the
//! logger itself is configured with two numeric strings: a minimum severity
//! (0 = info, 1 = warning, 2 = error, 3 = fatal) and a verbosity level used
//! to refine the info level.
//!
//! | Name | Severity | Verbosity |
//! |------|----------|-----------|
//! | CRITICAL | 3 | 0 |
//! | ERROR | 2 | 0 |
//! | WARNING | 1 | 0 |
//! | NOTICE | 0 | 0 |
//! | INFORMATIONAL | 0 | 1 |
//! | DEBUG | 0 | 2 |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

use crate::error::{HalError, HalResult};

/// Name returned for a (severity, verbosity) pair that matches no level.
pub const UNKNOWN_LOG_SEVERITY: &str = "UNKNOWN";

/// Logger configuration as a (severity, verbosity) pair of numeric strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub severity: String,
    pub verbosity: String,
}

impl LoggingConfig {
    pub fn new(severity: impl Into<String>, verbosity: impl Into<String>) -> Self {
        Self {
            severity: severity.into(),
            verbosity: verbosity.into(),
        }
    }
}

/// Syslog-style severity levels accepted by the management interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogSeverity {
    Critical,
    Error,
    Warning,
    Notice,
    Informational,
    Debug,
}

impl LogSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            LogSeverity::Critical => "CRITICAL",
            LogSeverity::Error => "ERROR",
            LogSeverity::Warning => "WARNING",
            LogSeverity::Notice => "NOTICE",
            LogSeverity::Informational => "INFORMATIONAL",
            LogSeverity::Debug => "DEBUG",
        }
    }

    /// Returns the (severity, verbosity) pair for this level.
    pub fn logging_config(&self) -> LoggingConfig {
        let (severity, verbosity) = match self {
            LogSeverity::Critical => ("3", "0"),
            LogSeverity::Error => ("2", "0"),
            LogSeverity::Warning => ("1", "0"),
            LogSeverity::Notice => ("0", "0"),
            LogSeverity::Informational => ("0", "1"),
            LogSeverity::Debug => ("0", "2"),
        };
        LoggingConfig::new(severity, verbosity)
    }

    /// Returns the most verbose `tracing` level to emit at this severity.
    pub const fn level_filter(&self) -> LevelFilter {
        match self {
            LogSeverity::Critical | LogSeverity::Error => LevelFilter::ERROR,
            LogSeverity::Warning => LevelFilter::WARN,
            LogSeverity::Notice => LevelFilter::INFO,
            LogSeverity::Informational => LevelFilter::DEBUG,
            LogSeverity::Debug => LevelFilter::TRACE,
        }
    }
}

impl fmt::Display for LogSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LogSeverity {
    type Err = HalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CRITICAL" => Ok(LogSeverity::Critical),
            "ERROR" => Ok(LogSeverity::Error),
            "WARNING" => Ok(LogSeverity::Warning),
            "NOTICE" => Ok(LogSeverity::Notice),
            "INFORMATIONAL" => Ok(LogSeverity::Informational),
            "DEBUG" => Ok(LogSeverity::Debug),
            _ => Err(HalError::invalid_param(format!(
                "Invalid severity string \"{}\".",
                s
            ))),
        }
    }
}

/// Converts a severity name to its logger configuration.
///
/// Names are matched exactly (upper case). Unlike the other string lookups
/// in this crate, an unknown name is an error rather than `UNKNOWN`.
pub fn string_to_log_severity(severity: &str) -> HalResult<LoggingConfig> {
    severity.parse::<LogSeverity>().map(|s| s.logging_config())
}

/// Converts a logger configuration back to a severity name.
///
/// The verbosity comparison is lexicographic on the string, so any verbosity
/// sorting at or after `"2"` reads as DEBUG while `"10"` reads as NOTICE.
pub fn log_severity_to_string(config: &LoggingConfig) -> &'static str {
    let severity = config.severity.as_str();
    let verbosity = config.verbosity.as_str();

    if severity == "0" && verbosity >= "2" {
        LogSeverity::Debug.as_str()
    } else if severity == "0" && verbosity == "1" {
        LogSeverity::Informational.as_str()
    } else if severity == "0" {
        LogSeverity::Notice.as_str()
    } else if severity == "1" {
        LogSeverity::Warning.as_str()
    } else if severity == "2" {
        LogSeverity::Error.as_str()
    } else if severity == "3" {
        LogSeverity::Critical.as_str()
    } else {
        UNKNOWN_LOG_SEVERITY
    }
}
