//! Content digests for fetched resources.
//!
//! A [`HashType`] is computed over the raw bytes of a payload and used to
//! tell whether a resource changed between two fetches, independently of any
//! transport-level caching.
//!
//! # Example
//!
//! ```
//! use ferry_verify::{HashType, Hasher, Sha256Hasher};
//!
//! let mut hasher = Sha256Hasher::new();
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//!
//! assert_eq!(hasher.finalize(), HashType::of(b"hello world"));
//! assert!(!HashType::default().is_valid());
//! ```

pub use self::error::{Result, VerificationError};
pub use self::hash::{HASH_LEN, HashType};
pub use self::hasher::{Hasher, Sha256Hasher};

mod error;
mod hash;
mod hasher;
