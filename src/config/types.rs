//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.
//! - ErrorPolicy decides what a failed move does to the rest of the plan.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Operator messages plus warnings (default)
    #[default]
    Normal,
    /// Per-file progress in the log
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// What a failed move does to the remaining plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first failure.
    #[default]
    Halt,
    /// Record the failure and keep going.
    Continue,
}

impl FromStr for ErrorPolicy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "halt" | "stop" => Ok(ErrorPolicy::Halt),
            "continue" | "skip" => Ok(ErrorPolicy::Continue),
            _ => Err(format!("invalid error policy: '{s}' (expected halt or continue)")),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorPolicy::Halt => "halt",
            ErrorPolicy::Continue => "continue",
        })
    }
}

/// Runtime settings that are not part of a single move request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// Emit logs as JSON
    pub json: bool,
    pub error_policy: ErrorPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_policy_parses_aliases() {
        assert_eq!("HALT".parse::<ErrorPolicy>(), Ok(ErrorPolicy::Halt));
        assert_eq!(" continue ".parse::<ErrorPolicy>(), Ok(ErrorPolicy::Continue));
        assert_eq!("skip".parse::<ErrorPolicy>(), Ok(ErrorPolicy::Continue));
        assert!("maybe".parse::<ErrorPolicy>().is_err());
    }

    #[test]
    fn defaults_halt_at_normal_level() {
        let cfg = Config::default();
        assert_eq!(cfg.error_policy, ErrorPolicy::Halt);
        assert_eq!(cfg.log_level, LogLevel::Normal);
        assert!(cfg.log_file.is_none());
    }
}
