/// Error types for object records.
#[derive(Debug, thiserror::Error)]
pub enum ObjectError {
    #[error("commit id mismatch: stored {stored}, computed {computed}")]
    IdMismatch { stored: String, computed: String },

    #[error("malformed commit record: {0}")]
    Json(#[from] serde_json::Error),
}
