//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - `mv` is the flat mode, `mv-date` (alias `mv-year`) the date-partitioned mode.
//! - --debug is a shorthand for --log-level debug and wins over it.

use clap::{Args as ClapArgs, Parser, Subcommand, ValueHint};
use std::path::{Path, PathBuf};

use crate::config::types::{Config, ErrorPolicy, LogLevel};
use crate::errors::MoveError;
use crate::plan::MoveSpec;

/// Move files of one type between directories, asking before anything destructive.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Move files by extension, optionally into year/month folders")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(long, global = true, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, global = true, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Also append logs to this file.
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON.
    #[arg(long, global = true, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Keep going after a failed move instead of stopping the run.
    #[arg(long, global = true)]
    pub continue_on_error: bool,

    /// Print where fsmove looks for its config file (or FSMOVE_CONFIG if set), then exit.
    #[arg(long, help = "Print the config file location used by fsmove and exit")]
    pub print_config: bool,

    /// Write a template config file at the config location, then exit.
    #[arg(long, conflicts_with = "print_config")]
    pub init_config: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Move matching files from the top level of SOURCE into DESTINATION.
    Mv(MoveArgs),
    /// Move matching files from anywhere under SOURCE into DESTINATION/<year>/<month>.
    #[command(name = "mv-date", alias = "mv-year")]
    MvDate(MoveArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct MoveArgs {
    #[arg(value_name = "SOURCE", value_hint = ValueHint::DirPath)]
    pub source: PathBuf,

    #[arg(value_name = "DESTINATION", value_hint = ValueHint::DirPath)]
    pub destination: PathBuf,

    /// Type of file to move (e.g. .jpg, .png, .txt).
    #[arg(short = 't', long = "type", value_name = "EXT")]
    pub extension: String,

    /// Dry run: show what would be moved without touching the filesystem.
    #[arg(short = 'd', long = "dry", visible_alias = "dry-run")]
    pub dry: bool,
}

impl Command {
    /// Build the immutable request for this invocation.
    pub fn to_spec(&self) -> Result<MoveSpec, MoveError> {
        let (m, date_mode) = match self {
            Command::Mv(m) => (m, false),
            Command::MvDate(m) => (m, true),
        };
        MoveSpec::new(
            sanitize_path(&m.source),
            sanitize_path(&m.destination),
            m.extension.trim(),
            m.dry,
            date_mode,
        )
    }
}

/// Trim surrounding quotes left behind by shells (PowerShell/CMD, stray escaping).
fn sanitize_path(p: &Path) -> PathBuf {
    let s = p.to_string_lossy();
    let trimmed = s.trim();
    let inner = if trimmed.len() >= 2
        && ((trimmed.starts_with('"') && trimmed.ends_with('"'))
            || (trimmed.starts_with('\'') && trimmed.ends_with('\'')))
    {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    };
    if inner == s {
        p.to_path_buf()
    } else {
        PathBuf::from(inner)
    }
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(f) = &self.log_file {
            cfg.log_file = Some(f.clone());
        }
        if self.json {
            cfg.json = true;
        }
        if self.continue_on_error {
            cfg.error_policy = ErrorPolicy::Continue;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
