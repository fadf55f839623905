//! Content-addressed object storage.
//!
//! Blobs live at `objects/blobs/<hash>` as raw bytes; commit records live at
//! `objects/commits/<id>` as JSON. Filenames equal content hashes, puts are
//! idempotent, and nothing is ever deleted.

mod error;
mod read;
mod write;

pub use error::OdbError;

use std::path::{Path, PathBuf};

use minigit_hash::ObjectId;

/// Store handle rooted at the repository's `objects/` directory.
#[derive(Debug, Clone)]
pub struct ObjectStore {
    objects_dir: PathBuf,
}

impl ObjectStore {
    /// Open the store under a repository directory (the `.minigit` dir).
    pub fn new(repo_dir: &Path) -> Self {
        Self {
            objects_dir: repo_dir.join("objects"),
        }
    }

    /// Path of a blob with the given id.
    pub(crate) fn blob_path(&self, id: &ObjectId) -> PathBuf {
        self.objects_dir.join("blobs").join(id.to_hex())
    }

    /// Path of a commit record with the given id.
    pub(crate) fn commit_path(&self, id: &ObjectId) -> PathBuf {
        self.objects_dir.join("commits").join(id.to_hex())
    }

    pub(crate) fn objects_dir(&self) -> &Path {
        &self.objects_dir
    }

    /// Does a blob with this id exist?
    pub fn has_blob(&self, id: &ObjectId) -> bool {
        self.blob_path(id).is_file()
    }

    /// Does a commit with this id exist?
    pub fn has_commit(&self, id: &ObjectId) -> bool {
        self.commit_path(id).is_file()
    }
}
