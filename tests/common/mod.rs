//! Test doubles shared by the integration tests.
//! - MemFs: in-memory tree that keeps insertion order for listings and records mutations.
//! - ScriptedPrompt: answers questions from a fixed list, then declines.
//! - BrokenPrompt: every read fails, like a closed terminal.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use fsmove::{EntryKind, FileSystem, MoveError, Prompt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    CreateDir(PathBuf),
    Move(PathBuf, PathBuf),
}

#[derive(Debug, Clone)]
enum Node {
    Dir,
    File(String),
}

#[derive(Default)]
pub struct MemFs {
    entries: RefCell<Vec<(PathBuf, Node)>>,
    mutations: RefCell<Vec<Mutation>>,
    failing_sources: RefCell<HashSet<PathBuf>>,
    failing_creates: RefCell<HashSet<PathBuf>>,
}

fn io_err(op: &'static str, path: &Path, kind: io::ErrorKind) -> MoveError {
    MoveError::Io {
        op,
        path: path.to_path_buf(),
        source: io::Error::from(kind),
        hint: String::new(),
    }
}

impl MemFs {
    pub fn new() -> Self {
        Self::default()
    }

    fn kind_of(&self, path: &Path) -> Option<EntryKind> {
        self.entries.borrow().iter().find(|(p, _)| p == path).map(|(_, n)| match n {
            Node::Dir => EntryKind::Directory,
            Node::File(_) => EntryKind::File,
        })
    }

    fn insert(&self, path: &Path, node: Node) {
        let mut entries = self.entries.borrow_mut();
        if let Some(slot) = entries.iter_mut().find(|(p, _)| p == path) {
            slot.1 = node;
        } else {
            entries.push((path.to_path_buf(), node));
        }
    }

    fn ensure_dirs(&self, path: &Path) {
        let mut chain: Vec<&Path> = path.ancestors().filter(|a| !a.as_os_str().is_empty()).collect();
        chain.reverse();
        for dir in chain {
            if self.kind_of(dir).is_none() {
                self.insert(dir, Node::Dir);
            }
        }
    }

    /// Add a directory (and its ancestors).
    pub fn dir(self, path: &str) -> Self {
        self.ensure_dirs(Path::new(path));
        self
    }

    /// Add a file with `content` (and its ancestor directories).
    pub fn file(self, path: &str, content: &str) -> Self {
        let p = Path::new(path);
        if let Some(parent) = p.parent() {
            self.ensure_dirs(parent);
        }
        self.insert(p, Node::File(content.to_string()));
        self
    }

    /// Make every move of `src` fail with a permission error.
    pub fn fail_moves_of(self, src: &str) -> Self {
        self.failing_sources.borrow_mut().insert(PathBuf::from(src));
        self
    }

    /// Make creating `dir` fail with a permission error.
    pub fn fail_creates_of(self, dir: &str) -> Self {
        self.failing_creates.borrow_mut().insert(PathBuf::from(dir));
        self
    }

    pub fn mutations(&self) -> Vec<Mutation> {
        self.mutations.borrow().clone()
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.entries.borrow().iter().find(|(p, _)| p == Path::new(path)).and_then(|(_, n)| match n {
            Node::File(c) => Some(c.clone()),
            Node::Dir => None,
        })
    }

    pub fn has(&self, path: &str) -> bool {
        self.kind_of(Path::new(path)).is_some()
    }
}

impl FileSystem for MemFs {
    fn list_dir(&self, path: &Path) -> Result<Vec<OsString>, MoveError> {
        match self.kind_of(path) {
            Some(EntryKind::Directory) => Ok(self
                .entries
                .borrow()
                .iter()
                .filter(|(p, _)| p.parent() == Some(path))
                .filter_map(|(p, _)| p.file_name().map(|n| n.to_os_string()))
                .collect()),
            Some(_) => Err(io_err("list directory", path, io::ErrorKind::Other)),
            None => Err(io_err("list directory", path, io::ErrorKind::NotFound)),
        }
    }

    fn stat(&self, path: &Path) -> Result<Option<EntryKind>, MoveError> {
        Ok(self.kind_of(path))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), MoveError> {
        if self.failing_creates.borrow().contains(path) {
            return Err(io_err("create directory", path, io::ErrorKind::PermissionDenied));
        }
        self.mutations.borrow_mut().push(Mutation::CreateDir(path.to_path_buf()));
        self.ensure_dirs(path);
        Ok(())
    }

    fn move_entry(&self, src: &Path, dest: &Path) -> Result<(), MoveError> {
        self.mutations.borrow_mut().push(Mutation::Move(src.to_path_buf(), dest.to_path_buf()));
        if self.failing_sources.borrow().contains(src) {
            return Err(io_err("move file", src, io::ErrorKind::PermissionDenied));
        }
        if dest.parent().and_then(|p| self.kind_of(p)) != Some(EntryKind::Directory) {
            return Err(io_err("move file", dest, io::ErrorKind::NotFound));
        }
        let node = {
            let mut entries = self.entries.borrow_mut();
            let idx = entries
                .iter()
                .position(|(p, _)| p == src)
                .ok_or_else(|| io_err("move file", src, io::ErrorKind::NotFound))?;
            entries.remove(idx).1
        };
        self.insert(dest, node);
        Ok(())
    }
}

/// Answers in order; once exhausted every question gets an empty line (a decline).
#[derive(Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    pub questions: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|s| s.to_string()).collect(),
            questions: Vec::new(),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, message: &str) -> Result<String, MoveError> {
        self.questions.push(message.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}

/// Records the question, then fails the read.
#[derive(Default)]
pub struct BrokenPrompt {
    pub questions: Vec<String>,
}

impl Prompt for BrokenPrompt {
    fn ask(&mut self, message: &str) -> Result<String, MoveError> {
        self.questions.push(message.to_string());
        Err(MoveError::Prompt(io::Error::from(io::ErrorKind::BrokenPipe)))
    }
}
