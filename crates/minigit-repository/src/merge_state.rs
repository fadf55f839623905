//! The `MERGE_HEAD` sentinel.
//!
//! Present only between a conflicted merge and the commit that resolves
//! it. Records which head was merged in so the resolving commit can carry
//! it as a second parent. A stale sentinel (after a crash) is recovered by
//! simply re-merging.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use minigit_hash::ObjectId;
use serde::{Deserialize, Serialize};

use crate::RepoError;

/// Name of the sentinel file under the repository directory.
pub const MERGE_HEAD_FILE: &str = "MERGE_HEAD";

/// The in-progress merge being resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeState {
    /// Head of the merged-in branch.
    pub other_commit_id: ObjectId,
    /// Name of the merged-in branch.
    pub branch: String,
}

/// Does a conflicted merge await resolution?
pub fn exists(repo_dir: &Path) -> bool {
    repo_dir.join(MERGE_HEAD_FILE).is_file()
}

/// Read the sentinel, if present.
pub fn read(repo_dir: &Path) -> Result<Option<MergeState>, RepoError> {
    let bytes = match fs::read(repo_dir.join(MERGE_HEAD_FILE)) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(RepoError::Io(e)),
    };
    let state = serde_json::from_slice(&bytes)
        .map_err(|e| RepoError::Io(std::io::Error::new(ErrorKind::InvalidData, e)))?;
    Ok(Some(state))
}

/// Write the sentinel.
pub fn write(repo_dir: &Path, state: &MergeState) -> Result<(), RepoError> {
    let bytes = serde_json::to_vec_pretty(state)
        .map_err(|e| RepoError::Io(std::io::Error::new(ErrorKind::InvalidData, e)))?;
    fs::write(repo_dir.join(MERGE_HEAD_FILE), bytes)?;
    Ok(())
}

/// Remove the sentinel (no-op if absent).
pub fn clear(repo_dir: &Path) -> Result<(), RepoError> {
    match fs::remove_file(repo_dir.join(MERGE_HEAD_FILE)) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(RepoError::Io(e)),
    }
}
