use minigit_hash::{Hasher, ObjectId};

/// An immutable content-addressed byte sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub data: Vec<u8>,
}

impl Blob {
    /// Wrap raw bytes as a blob.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    /// The identifier this blob is stored under.
    pub fn id(&self) -> ObjectId {
        Hasher::digest(&self.data)
    }
}
