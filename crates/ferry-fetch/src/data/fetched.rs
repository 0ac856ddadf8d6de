use std::fmt;

use ferry_verify::HashType;

/// Origin kind of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleType {
    File,
    Http,
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleType::File => write!(f, "File"),
            VehicleType::Http => write!(f, "HTTP"),
        }
    }
}

/// Successful outcome of [`crate::Vehicle::read`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched {
    /// Fresh payload; `hash` is the digest of `bytes`.
    Content { bytes: Vec<u8>, hash: HashType },
    /// The origin confirmed nothing changed; `hash` is the one the caller passed in.
    Unchanged { hash: HashType },
}

impl Fetched {
    pub fn hash(&self) -> HashType {
        match self {
            Fetched::Content { hash, .. } | Fetched::Unchanged { hash } => *hash,
        }
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            Fetched::Content { bytes, .. } => Some(bytes),
            Fetched::Unchanged { .. } => None,
        }
    }

    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Fetched::Content { bytes, .. } => Some(bytes),
            Fetched::Unchanged { .. } => None,
        }
    }

    pub fn is_unchanged(&self) -> bool { matches!(self, Fetched::Unchanged { .. }) }
}
