/// Error types for the staging index.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("file {0} does not exist in the working tree")]
    NoMatchingFile(String),

    #[error("malformed index file: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Odb(#[from] minigit_odb::OdbError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
