//! Append-only journals of ref pointer movements.
//!
//! One reflog exists for HEAD (`logs/HEAD`) and one per branch
//! (`logs/refs/heads/<name>`). The file format is a JSON object
//! `{ "log": [ … ] }` with entries in chronological order. The HEAD log
//! records every movement of the current branch's head as observed from
//! HEAD (commits, checkouts, reverts, merges); a branch log records only
//! movements of that branch.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use minigit_hash::{serde_oid, ObjectId};
use serde::{Deserialize, Serialize};

use crate::{BranchName, RefError};

/// Which journal an entry is appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Head,
    Branch(BranchName),
}

impl LogTarget {
    /// The journal's file path under the repository directory.
    pub fn path(&self, repo_dir: &Path) -> PathBuf {
        match self {
            LogTarget::Head => repo_dir.join("logs").join("HEAD"),
            LogTarget::Branch(name) => repo_dir
                .join("logs")
                .join("refs")
                .join("heads")
                .join(name.as_str()),
        }
    }
}

/// A single reflog entry recording a pointer transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflogEntry {
    /// Previous commit id, `""` when the ref was unborn.
    #[serde(with = "serde_oid::opt_empty")]
    pub old_commit_id: Option<ObjectId>,
    pub new_commit_id: ObjectId,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub merge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub other_commit_id: Option<ObjectId>,
}

impl ReflogEntry {
    /// A plain pointer transition.
    pub fn new(
        old_commit_id: Option<ObjectId>,
        new_commit_id: ObjectId,
        message: impl Into<String>,
    ) -> Self {
        Self {
            old_commit_id,
            new_commit_id,
            message: message.into(),
            merge: None,
            other_commit_id: None,
        }
    }

    /// Mark this transition as a merge of `other`.
    pub fn with_merge(mut self, other: ObjectId) -> Self {
        self.merge = Some(true);
        self.other_commit_id = Some(other);
        self
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ReflogFile {
    log: Vec<ReflogEntry>,
}

/// Read all entries of a journal in chronological order.
/// A missing journal reads as empty.
pub fn read_reflog(repo_dir: &Path, target: &LogTarget) -> Result<Vec<ReflogEntry>, RefError> {
    let path = target.path(repo_dir);
    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(RefError::Io(e)),
    };
    let file: ReflogFile = serde_json::from_slice(&bytes)
        .map_err(|e| RefError::Reflog(format!("{}: {}", path.display(), e)))?;
    Ok(file.log)
}

/// Append an entry to a journal, creating it (and its parents) if needed.
pub fn append_reflog_entry(
    repo_dir: &Path,
    target: &LogTarget,
    entry: ReflogEntry,
) -> Result<(), RefError> {
    let path = target.path(repo_dir);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = match fs::read(&path) {
        Ok(bytes) => serde_json::from_slice::<ReflogFile>(&bytes)
            .map_err(|e| RefError::Reflog(format!("{}: {}", path.display(), e)))?,
        Err(e) if e.kind() == ErrorKind::NotFound => ReflogFile::default(),
        Err(e) => return Err(RefError::Io(e)),
    };

    file.log.push(entry);
    let bytes = serde_json::to_vec_pretty(&file)
        .map_err(|e| RefError::Reflog(e.to_string()))?;
    fs::write(&path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use minigit_hash::Hasher;

    use super::*;

    #[test]
    fn append_and_read_chronological() {
        let dir = tempfile::tempdir().unwrap();
        let target = LogTarget::Branch(BranchName::new("master").unwrap());
        let first = Hasher::digest(b"first");
        let second = Hasher::digest(b"second");

        append_reflog_entry(dir.path(), &target, ReflogEntry::new(None, first, "one")).unwrap();
        append_reflog_entry(
            dir.path(),
            &target,
            ReflogEntry::new(Some(first), second, "two"),
        )
        .unwrap();

        let entries = read_reflog(dir.path(), &target).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "one");
        assert_eq!(entries[1].old_commit_id, Some(first));
        assert_eq!(entries[1].new_commit_id, second);
    }

    #[test]
    fn missing_journal_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_reflog(dir.path(), &LogTarget::Head).unwrap().is_empty());
    }

    #[test]
    fn file_shape_matches_contract() {
        let dir = tempfile::tempdir().unwrap();
        let id = Hasher::digest(b"c");
        append_reflog_entry(dir.path(), &LogTarget::Head, ReflogEntry::new(None, id, "msg"))
            .unwrap();

        let raw = fs::read(dir.path().join("logs").join("HEAD")).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&raw).unwrap();
        let last = &json["log"][0];
        assert_eq!(last["old_commit_id"], "");
        assert_eq!(last["new_commit_id"], id.to_hex());
        assert_eq!(last["message"], "msg");
        assert!(last.get("merge").is_none());
    }

    #[test]
    fn merge_entry_carries_other_id() {
        let dir = tempfile::tempdir().unwrap();
        let new = Hasher::digest(b"merge-commit");
        let other = Hasher::digest(b"other-head");
        let entry = ReflogEntry::new(Some(Hasher::digest(b"old")), new, "merged").with_merge(other);
        append_reflog_entry(dir.path(), &LogTarget::Head, entry).unwrap();

        let entries = read_reflog(dir.path(), &LogTarget::Head).unwrap();
        assert_eq!(entries[0].merge, Some(true));
        assert_eq!(entries[0].other_commit_id, Some(other));
    }
}
