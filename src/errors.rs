//! Typed error definitions for fsmove.
//! Operator declines and empty plans are outcomes, not errors; see `orchestrator::RunOutcome`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoveError {
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("{op} '{}': {source}{hint}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
        /// Human hint derived from the OS error (may be empty).
        hint: String,
    },

    #[error("Extension filter must not be empty")]
    EmptyExtension,

    #[error("Could not read operator input: {0}")]
    Prompt(#[source] io::Error),
}

impl MoveError {
    /// Stable short name used as the `kind` field in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            MoveError::NotADirectory(_) => "not_a_directory",
            MoveError::Io { .. } => "io",
            MoveError::EmptyExtension => "empty_extension",
            MoveError::Prompt(_) => "prompt",
        }
    }
}
