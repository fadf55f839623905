//! The staging index: the snapshot-in-progress for the next commit.
//!
//! Persisted at `index.json` as `{ "tracked_files": { path: hash } }`.
//! Paths are stored in repository form (forward slashes); the map is
//! ordered so listings and serialization are lexicographic.

mod error;

pub use error::IndexError;

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use minigit_hash::ObjectId;
use minigit_odb::ObjectStore;
use minigit_utils::path as repo_path;
use serde::{Deserialize, Serialize};

/// Name of the index file under the repository directory.
pub const INDEX_FILE: &str = "index.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    tracked_files: BTreeMap<String, ObjectId>,
}

impl Index {
    /// An empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the index from disk. A missing file yields an empty index.
    pub fn read_from(path: &Path) -> Result<Self, IndexError> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::new()),
            Err(e) => return Err(IndexError::Io(e)),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Write the index to disk.
    pub fn write_to(&self, path: &Path) -> Result<(), IndexError> {
        let bytes = serde_json::to_vec_pretty(self)?;
        fs::write(path, bytes)?;
        Ok(())
    }

    /// Stage a working-tree file: hash its content, write the blob if new,
    /// and record the mapping. Returns the normalized path and blob hash.
    pub fn stage(
        &mut self,
        work_dir: &Path,
        store: &ObjectStore,
        user_path: &str,
    ) -> Result<(String, ObjectId), IndexError> {
        let path = repo_path::to_repo_path(user_path);
        let fs_path = repo_path::to_fs_path(work_dir, &path);
        let data = match fs::read(&fs_path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(IndexError::NoMatchingFile(path))
            }
            Err(e) => return Err(IndexError::Io(e)),
        };
        let hash = store.put_blob(&data)?;
        self.tracked_files.insert(path.clone(), hash);
        Ok((path, hash))
    }

    /// Is this path staged?
    pub fn contains(&self, path: &str) -> bool {
        self.tracked_files.contains_key(path)
    }

    /// The staged blob hash of a path, if any.
    pub fn hash_of(&self, path: &str) -> Option<ObjectId> {
        self.tracked_files.get(path).copied()
    }

    /// Staged paths in lexicographic order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.tracked_files.keys().map(String::as_str)
    }

    /// The full path → hash mapping.
    pub fn tracked_files(&self) -> &BTreeMap<String, ObjectId> {
        &self.tracked_files
    }

    /// Clone the mapping as a commit snapshot.
    pub fn snapshot(&self) -> BTreeMap<String, ObjectId> {
        self.tracked_files.clone()
    }

    /// Replace the whole mapping (checkout / revert / merge restoration).
    pub fn replace(&mut self, map: BTreeMap<String, ObjectId>) {
        self.tracked_files = map;
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.tracked_files.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.tracked_files.is_empty()
    }
}
