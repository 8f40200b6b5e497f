//! Core library for `fsmove`.
//!
//! Two stages, both pure with respect to process state:
//! - [`discovery::plan`] turns a [`MoveSpec`] into a [`MovePlan`] (flat or date-partitioned).
//! - [`orchestrator::execute`] walks the plan through the operator's confirmation gates
//!   and performs the moves, returning a [`RunOutcome`].
//!
//! Filesystem access and operator input are injected through the [`FileSystem`] and
//! [`Prompt`] traits; the binary wires in [`StdFs`] and [`LinePrompt`].

pub mod cli;
pub mod config;
pub mod discovery;
pub mod errors;
pub mod fs_ops;
pub mod orchestrator;
pub mod output;
pub mod plan;
pub mod platform;
pub mod prompt;

pub use config::{Config, ErrorPolicy, LogLevel, default_config_path, path_has_symlink_ancestor};
pub use discovery::plan;
pub use errors::MoveError;
pub use fs_ops::{EntryKind, FileSystem, StdFs};
pub use orchestrator::{RunOutcome, RunSummary, execute};
pub use plan::{MoveOutcome, MovePlan, MoveSpec, PlannedMove, SkipReason};
pub use prompt::{AFFIRMATIVE, LinePrompt, Prompt};
