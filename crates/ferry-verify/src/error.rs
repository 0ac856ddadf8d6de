#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("invalid digest length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error(transparent)]
    InvalidHex(#[from] hex::FromHexError),
}

pub type Result<T> = std::result::Result<T, VerificationError>;
