//! Filesystem capability used by discovery and the orchestrator.
//!
//! The core never touches `std::fs` directly: it goes through [`FileSystem`] so tests
//! can substitute a recording fake and prove which mutations happened.

mod file_move;
mod helpers;

pub use file_move::move_file;
pub use helpers::{io_error_with_help, io_hint};

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

use crate::errors::MoveError;

/// What a path points at. Symlinks are reported as `Other` and never followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    Other,
}

pub trait FileSystem {
    /// Entry names of `path`, in the order the underlying listing returns them.
    fn list_dir(&self, path: &Path) -> Result<Vec<OsString>, MoveError>;

    /// Kind of the entry at `path`, or `None` when nothing exists there.
    fn stat(&self, path: &Path) -> Result<Option<EntryKind>, MoveError>;

    /// Create `path` and any missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<(), MoveError>;

    /// Move `src` to `dest`, replacing `dest` if it exists.
    fn move_entry(&self, src: &Path, dest: &Path) -> Result<(), MoveError>;

    fn exists(&self, path: &Path) -> Result<bool, MoveError> {
        Ok(self.stat(path)?.is_some())
    }

    /// Whether `path` can be listed as a directory. Unlike [`FileSystem::stat`], a
    /// symlink to a directory counts.
    fn is_dir(&self, path: &Path) -> Result<bool, MoveError> {
        Ok(self.stat(path)? == Some(EntryKind::Directory))
    }
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFs;

impl FileSystem for StdFs {
    fn list_dir(&self, path: &Path) -> Result<Vec<OsString>, MoveError> {
        let rd = fs::read_dir(path).map_err(io_error_with_help("list directory", path))?;
        rd.map(|entry| {
            entry
                .map(|e| e.file_name())
                .map_err(io_error_with_help("read directory entry", path))
        })
        .collect()
    }

    fn stat(&self, path: &Path) -> Result<Option<EntryKind>, MoveError> {
        match fs::symlink_metadata(path) {
            Ok(meta) => {
                let ft = meta.file_type();
                let kind = if ft.is_dir() {
                    EntryKind::Directory
                } else if ft.is_file() {
                    EntryKind::File
                } else {
                    EntryKind::Other
                };
                Ok(Some(kind))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error_with_help("stat", path)(e)),
        }
    }

    fn is_dir(&self, path: &Path) -> Result<bool, MoveError> {
        match fs::metadata(path) {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_error_with_help("stat", path)(e)),
        }
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), MoveError> {
        fs::create_dir_all(path).map_err(io_error_with_help("create directory", path))
    }

    fn move_entry(&self, src: &Path, dest: &Path) -> Result<(), MoveError> {
        move_file(src, dest)
    }
}
