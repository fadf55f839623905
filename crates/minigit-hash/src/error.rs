/// Error types for hash and identifier handling.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    #[error("invalid hex length: expected {expected}, got {actual}")]
    InvalidHexLength { expected: usize, actual: usize },

    #[error("invalid hex character '{character}' at position {position}")]
    InvalidHex { position: usize, character: char },
}
