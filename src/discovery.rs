//! Discovery: turn a `MoveSpec` into a `MovePlan`.
//!
//! - Flat mode lists the immediate children of the source root and keeps names ending
//!   with the extension suffix exactly as supplied. No recursion, no stat.
//! - Date mode walks the source root depth-first, skipping `@`-prefixed entries, and
//!   keeps regular files whose path extension equals the configured one. The
//!   destination gains `<year>/<month>` components inferred from digit-only
//!   directory segments of the full source path.
//!
//! Order follows the directory listings as returned; nothing is sorted.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, trace};

use crate::errors::MoveError;
use crate::fs_ops::{EntryKind, FileSystem};
use crate::plan::{MovePlan, MoveSpec};

/// Build the plan for `spec`. Fails with `NotADirectory` if the source root is not a
/// directory; never falls back from date mode to flat mode. The root itself may be a
/// symlink to a directory, links below it are not followed.
pub fn plan<F: FileSystem + ?Sized>(spec: &MoveSpec, fs: &F) -> Result<MovePlan, MoveError> {
    let root = spec.source_root();
    if !fs.is_dir(root)? {
        return Err(MoveError::NotADirectory(root.to_path_buf()));
    }

    let mut plan = MovePlan::default();
    if spec.date_mode() {
        let ext = spec.extension().strip_prefix('.').unwrap_or(spec.extension());
        walk_dated(fs, root, OsStr::new(ext), spec.destination_root(), &mut plan)?;
    } else {
        plan_flat(fs, spec, &mut plan)?;
    }
    debug!(root = %root.display(), count = plan.len(), date_mode = spec.date_mode(), "Discovery finished");
    Ok(plan)
}

fn plan_flat<F: FileSystem + ?Sized>(fs: &F, spec: &MoveSpec, plan: &mut MovePlan) -> Result<(), MoveError> {
    for name in fs.list_dir(spec.source_root())? {
        if !name.to_string_lossy().ends_with(spec.extension()) {
            continue;
        }
        plan.push(spec.source_root().join(&name), spec.destination_root().join(&name));
    }
    Ok(())
}

fn walk_dated<F: FileSystem + ?Sized>(
    fs: &F,
    dir: &Path,
    ext: &OsStr,
    destination_root: &Path,
    plan: &mut MovePlan,
) -> Result<(), MoveError> {
    for name in fs.list_dir(dir)? {
        if name.to_string_lossy().starts_with('@') {
            trace!(dir = %dir.display(), name = ?name, "Skipping @-entry");
            continue;
        }
        let path = dir.join(&name);
        match fs.stat(&path)? {
            Some(EntryKind::File) if path.extension() == Some(ext) => {
                let dest = dated_destination(destination_root, &path);
                plan.push(path, dest);
            }
            Some(EntryKind::Directory) => walk_dated(fs, &path, ext, destination_root, plan)?,
            _ => {}
        }
    }
    Ok(())
}

/// `destination_root[/<year>][/<month>]/<file name>` for a source file path.
pub fn dated_destination(destination_root: &Path, source: &Path) -> PathBuf {
    let (year, month) = infer_year_month(source);
    let mut dest = destination_root.to_path_buf();
    if let Some(y) = year {
        dest.push(y);
    }
    if let Some(m) = month {
        dest.push(m);
    }
    if let Some(name) = source.file_name() {
        dest.push(name);
    }
    dest
}

/// First 4-digit and first 2-digit directory segment of `path` (file name excluded).
/// Best effort: values are not checked against real calendar ranges.
pub fn infer_year_month(path: &Path) -> (Option<&str>, Option<&str>) {
    let mut year = None;
    let mut month = None;
    let dirs = path.parent().into_iter().flat_map(|p| p.components());
    for comp in dirs {
        let Component::Normal(seg) = comp else { continue };
        let Some(seg) = seg.to_str() else { continue };
        if !seg.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        match seg.len() {
            4 if year.is_none() => year = Some(seg),
            2 if month.is_none() => month = Some(seg),
            _ => {}
        }
    }
    (year, month)
}
