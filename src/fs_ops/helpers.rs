//! I/O error enrichment.
//!
//! Turns a bare io::Error into a `MoveError::Io` carrying the operation, the path
//! and a platform-aware hint the operator can act on.
//!
//! Usage:
//!   fs::create_dir_all(dir).map_err(io_error_with_help("create directory", dir))?;

use std::io;
use std::path::Path;

use crate::errors::MoveError;

/// Platform-aware hint for an io::Error, including the raw OS code when present.
pub fn io_hint(e: &io::Error) -> String {
    let Some(code) = e.raw_os_error() else {
        let hint = match e.kind() {
            io::ErrorKind::PermissionDenied => " - permission denied; check ownership and write permissions.",
            io::ErrorKind::NotFound => " - path not found; verify it exists.",
            io::ErrorKind::AlreadyExists => " - already exists; remove or choose another name.",
            _ => "",
        };
        return hint.to_string();
    };

    #[cfg(unix)]
    let hint = match code {
        libc::EACCES | libc::EPERM => " - permission denied; check ownership and write permissions.",
        libc::EXDEV => " - cross-filesystem; rename not possible.",
        libc::EBUSY => " - resource busy; ensure no other process is using it.",
        libc::ENOENT => " - path not found; verify it exists.",
        libc::ENOTDIR => " - a path component is not a directory.",
        libc::ENOSPC => " - insufficient space on device.",
        libc::EROFS => " - read-only filesystem; cannot write here.",
        libc::ENAMETOOLONG => " - filename or path too long; shorten path segments.",
        _ => "",
    };

    #[cfg(windows)]
    let hint = match code {
        5 => " - access denied; check permissions.",
        17 => " - not same device; cross-filesystem move.",
        32 => " - sharing violation; file is in use.",
        2 | 3 => " - path not found; verify it exists.",
        112 => " - insufficient disk space.",
        206 => " - filename or path too long.",
        _ => "",
    };

    #[cfg(not(any(unix, windows)))]
    let hint = "";

    format!("{hint} [os code: {code}]")
}

/// Adapter for `.map_err(...)`: io::Error -> MoveError::Io with op/path context.
pub fn io_error_with_help<'a>(op: &'static str, path: &'a Path) -> impl FnOnce(io::Error) -> MoveError + 'a {
    move |source: io::Error| MoveError::Io {
        op,
        path: path.to_path_buf(),
        hint: io_hint(&source),
        source,
    }
}
