use crate::permissions::PermissionMode;
use crate::{Error, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    pub permissions: PermissionMode,
    pub sync:        bool,
}

impl Options {
    pub fn new() -> Self { Self::default() }

    pub fn permissions(mut self, mode: PermissionMode) -> Self {
        self.permissions = mode;
        self
    }

    pub fn sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }
}

/// Write `content` to a sibling temp file, then rename it over `path`.
///
/// Readers observe either the previous content or the new one. The parent
/// directory must already exist.
pub fn atomic_write(path: impl AsRef<Path>, content: &[u8], options: Options) -> Result<()> {
    let path = path.as_ref();
    let parent = path.parent().ok_or_else(|| Error::Write {
        path:   path.to_path_buf(),
        source: std::io::Error::other("no parent directory"),
    })?;

    let tmp_path = parent.join(format!(".tmp.{}.ferry", uuid::Uuid::new_v4()));

    if let Err(e) = write_new(&tmp_path, content, options) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        Error::Write {
            path:   path.to_path_buf(),
            source: e,
        }
    })?;

    tracing::trace!(path = %path.display(), bytes = content.len(), "atomic write committed");
    Ok(())
}

fn write_new(tmp_path: &Path, content: &[u8], options: Options) -> Result<()> {
    let to_err = |e| Error::Write {
        path:   tmp_path.to_path_buf(),
        source: e,
    };

    let mut open = fs::OpenOptions::new();
    open.write(true).create_new(true);
    options.permissions.apply_to_open_options(&mut open);

    let mut file = open.open(tmp_path).map_err(to_err)?;
    file.write_all(content).map_err(to_err)?;
    if options.sync {
        file.sync_all().map_err(to_err)?;
    }
    Ok(())
}

pub fn atomic_read(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|e| Error::Read {
        path:   path.to_path_buf(),
        source: e,
    })
}
