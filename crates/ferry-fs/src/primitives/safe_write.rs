use crate::permissions::PermissionMode;
use crate::primitives::atomic_write::{Options, atomic_write};
use crate::{Error, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Create `dir` and any missing ancestors with `mode`.
///
/// Nothing is touched when the directory already exists. Other stat errors
/// are left for the subsequent write to report.
pub fn ensure_dir(dir: impl AsRef<Path>, mode: PermissionMode) -> Result<()> {
    let dir = dir.as_ref();
    if dir.as_os_str().is_empty() {
        return Ok(());
    }

    match fs::metadata(dir) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let mut builder = fs::DirBuilder::new();
            builder.recursive(true);
            mode.apply_to_dir_builder(&mut builder);
            builder.create(dir).map_err(|source| Error::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
            tracing::debug!(dir = %dir.display(), "created cache directory");
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Persist a resource payload: directories as `0o755`, the file as `0o666`,
/// replaced atomically.
pub fn safe_write(path: impl AsRef<Path>, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        ensure_dir(dir, PermissionMode::Directory)?;
    }

    atomic_write(path, content, Options::new().permissions(PermissionMode::Shared))
}
