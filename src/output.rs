//! All-or-nothing writing of the generated stylesheet.

use std::fs::{self, Permissions};
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Error, IoAction, Result};

/// Writes `contents` to `path`, replacing any existing file atomically.
///
/// The text goes to a temporary file in the destination directory, which is
/// then renamed over `path`. Readers see either the old file or the complete
/// new one; on failure the old file is left untouched and the temporary file
/// is removed. The destination directory must already exist.
///
/// The replaced file's permissions are carried over; a new file gets
/// `0644` on Unix.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let write_err = |e| Error::io(IoAction::WriteStylesheet, path, e);

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    if let Some(permissions) = target_permissions(path) {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(write_err)?;
    }
    tmp.as_file().sync_all().map_err(write_err)?;
    debug!(tmp = %tmp.path().display(), dest = %path.display(), "replacing stylesheet");
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// Permissions the written stylesheet should end up with.
fn target_permissions(path: &Path) -> Option<Permissions> {
    match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}
