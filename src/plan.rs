//! Request and plan types shared by discovery and the orchestrator.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::errors::MoveError;

/// One invocation's request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSpec {
    source_root: PathBuf,
    destination_root: PathBuf,
    extension: String,
    dry_run: bool,
    date_mode: bool,
}

impl MoveSpec {
    /// Build a validated spec. The extension must be non-empty.
    pub fn new(
        source_root: impl Into<PathBuf>,
        destination_root: impl Into<PathBuf>,
        extension: impl Into<String>,
        dry_run: bool,
        date_mode: bool,
    ) -> Result<Self, MoveError> {
        let extension = extension.into();
        if extension.is_empty() {
            return Err(MoveError::EmptyExtension);
        }
        Ok(Self {
            source_root: source_root.into(),
            destination_root: destination_root.into(),
            extension,
            dry_run,
            date_mode,
        })
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn destination_root(&self) -> &Path {
        &self.destination_root
    }

    /// Extension filter exactly as the caller supplied it.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn date_mode(&self) -> bool {
        self.date_mode
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMove {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl fmt::Display for PlannedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.source.display(), self.destination.display())
    }
}

/// Planned moves in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovePlan {
    moves: Vec<PlannedMove>,
}

impl MovePlan {
    pub fn push(&mut self, source: PathBuf, destination: PathBuf) {
        self.moves.push(PlannedMove { source, destination });
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlannedMove> {
        self.moves.iter()
    }

    /// Distinct destination directories, first-seen order.
    pub fn destination_dirs(&self) -> Vec<&Path> {
        let mut dirs: Vec<&Path> = Vec::new();
        for m in &self.moves {
            if let Some(parent) = m.destination.parent()
                && !dirs.contains(&parent)
            {
                dirs.push(parent);
            }
        }
        dirs
    }
}

impl<'a> IntoIterator for &'a MovePlan {
    type Item = &'a PlannedMove;
    type IntoIter = std::slice::Iter<'a, PlannedMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Destination file existed and the operator did not confirm overwrite.
    OverwriteDeclined,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::OverwriteDeclined => f.write_str("overwrite declined"),
        }
    }
}

/// Result of one planned move. Reported, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Skipped(SkipReason),
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_extension_is_rejected() {
        let err = MoveSpec::new("/src", "/dst", "", false, false).unwrap_err();
        assert!(matches!(err, MoveError::EmptyExtension));
    }

    #[test]
    fn destination_dirs_are_distinct_in_first_seen_order() {
        let mut plan = MovePlan::default();
        plan.push("/s/2023/07/a.mp4".into(), "/d/2023/07/a.mp4".into());
        plan.push("/s/misc/b.mp4".into(), "/d/b.mp4".into());
        plan.push("/s/2023/07/c.mp4".into(), "/d/2023/07/c.mp4".into());
        assert_eq!(
            plan.destination_dirs(),
            vec![Path::new("/d/2023/07"), Path::new("/d")]
        );
    }
}
