//! Single file move.
//! Tries rename first; across filesystems falls back to copy + remove of the source.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

use crate::errors::MoveError;

use super::helpers::io_error_with_help;

/// Move `src` to `dest`, replacing an existing `dest`.
pub fn move_file(src: &Path, dest: &Path) -> Result<(), MoveError> {
    match fs::rename(src, dest) {
        Ok(()) => {
            debug!(src = %src.display(), dest = %dest.display(), "Renamed");
            Ok(())
        }
        Err(e) if is_cross_device(&e) => copy_then_remove(src, dest, e),
        Err(e) => Err(io_error_with_help("move file", src)(e)),
    }
}

/// Cross-filesystem fallback. Only regular files are copied; anything else keeps the
/// rename error.
fn copy_then_remove(src: &Path, dest: &Path, rename_err: io::Error) -> Result<(), MoveError> {
    if !fs::symlink_metadata(src).is_ok_and(|m| m.is_file()) {
        warn!(error = %rename_err, src = %src.display(), "Rename crosses filesystems and source is not a regular file");
        return Err(io_error_with_help("move non-file across filesystems", src)(rename_err));
    }
    warn!(error = %rename_err, src = %src.display(), "Rename crosses filesystems, using copy+remove");
    fs::copy(src, dest).map_err(io_error_with_help("copy file", src))?;
    fs::remove_file(src).map_err(io_error_with_help("remove original file", src))?;
    Ok(())
}

fn is_cross_device(e: &io::Error) -> bool {
    #[cfg(unix)]
    if e.raw_os_error() == Some(libc::EXDEV) {
        return true;
    }
    e.kind() == io::ErrorKind::CrossesDevices
}
