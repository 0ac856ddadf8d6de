use std::fmt;
use std::str::FromStr;

use crate::{Result, Sha256Hasher, VerificationError};

/// Digest length in bytes.
pub const HASH_LEN: usize = 32;

/// Content digest of a fetched payload.
///
/// The all-zero value is reserved: it means "no prior knowledge" and is what
/// [`HashType::default`] returns. A digest is only trusted after an explicit
/// [`HashType::is_valid`] check.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HashType([u8; HASH_LEN]);

impl HashType {
    /// Digest of `data`.
    pub fn of(data: &[u8]) -> Self { Sha256Hasher::digest(data) }

    pub const fn from_array(bytes: [u8; HASH_LEN]) -> Self { Self(bytes) }

    /// Build a digest from raw bytes previously obtained via [`HashType::as_bytes`].
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let array: [u8; HASH_LEN] =
            bytes.try_into().map_err(|_| VerificationError::InvalidLength {
                expected: HASH_LEN,
                actual:   bytes.len(),
            })?;
        Ok(Self(array))
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s.trim())?;
        Self::from_slice(&bytes)
    }

    pub fn is_valid(&self) -> bool { self.0 != [0u8; HASH_LEN] }

    /// Compare against raw digest bytes, e.g. the ones kept by an ETag store.
    /// Slices of a different length never match.
    pub fn equal_bytes(&self, other: &[u8]) -> bool { self.0.as_slice() == other }

    pub fn as_bytes(&self) -> &[u8] { &self.0 }

    pub fn to_hex(&self) -> String { hex::encode(self.0) }
}

impl fmt::Display for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.to_hex()) }
}

impl fmt::Debug for HashType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashType({})", self.to_hex())
    }
}

impl FromStr for HashType {
    type Err = VerificationError;

    fn from_str(s: &str) -> Result<Self> { Self::from_hex(s) }
}

impl AsRef<[u8]> for HashType {
    fn as_ref(&self) -> &[u8] { &self.0 }
}
