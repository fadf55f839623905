/// Error types for object storage.
#[derive(Debug, thiserror::Error)]
pub enum OdbError {
    #[error("corrupt object {id}: {reason}")]
    Corrupt { id: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
