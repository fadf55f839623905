/// Error types for reference and reflog operations.
#[derive(Debug, thiserror::Error)]
pub enum RefError {
    #[error("invalid branch name: {0:?}")]
    InvalidName(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("reflog error: {0}")]
    Reflog(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
