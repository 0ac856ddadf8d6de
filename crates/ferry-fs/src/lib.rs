//! Atomic filesystem primitives for locally cached resources.
//!
//! - [`atomic_write`] replaces a file through a sibling temp file and a rename.
//! - [`safe_write`] additionally creates the parent directory tree and applies
//!   the fixed cache modes ([`FILE_MODE`], [`DIR_MODE`]).

mod error;
pub mod permissions;
mod primitives;

pub use error::{Error, Result};
pub use permissions::{DIR_MODE, FILE_MODE, PermissionMode};
pub use primitives::{
    Options as AtomicWriteOptions, atomic_read, atomic_write, ensure_dir, safe_write,
};
