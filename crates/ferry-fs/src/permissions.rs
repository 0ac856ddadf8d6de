use std::fs::{DirBuilder, OpenOptions};

/// Mode bits for regular files written by [`crate::safe_write`].
pub const FILE_MODE: u32 = 0o666;

/// Mode bits for directories created by [`crate::safe_write`].
pub const DIR_MODE: u32 = 0o755;

/// Permission bits requested when a file or directory is created.
///
/// Modes are passed to the creating syscall, so the process umask still
/// applies. On non-Unix platforms every mode behaves like `Inherit`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PermissionMode {
    /// Platform default for newly created entries.
    #[default]
    Inherit,

    /// `0o644`
    ReadWrite,

    /// `0o666`, the mode used for cached resource files.
    Shared,

    /// `0o755`
    Directory,
}

impl PermissionMode {
    pub fn to_unix_mode(self) -> Option<u32> {
        match self {
            Self::Inherit => None,
            Self::ReadWrite => Some(0o644),
            Self::Shared => Some(FILE_MODE),
            Self::Directory => Some(DIR_MODE),
        }
    }

    pub(crate) fn apply_to_open_options(self, options: &mut OpenOptions) {
        #[cfg(unix)]
        if let Some(mode) = self.to_unix_mode() {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(mode);
        }

        #[cfg(not(unix))]
        let _ = options;
    }

    pub(crate) fn apply_to_dir_builder(self, builder: &mut DirBuilder) {
        #[cfg(unix)]
        if let Some(mode) = self.to_unix_mode() {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(mode);
        }

        #[cfg(not(unix))]
        let _ = builder;
    }
}
