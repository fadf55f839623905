use std::collections::BTreeMap;

use minigit_hash::{serde_oid, Hasher, ObjectId};
use serde::{Deserialize, Serialize};

use crate::ObjectError;

/// A commit record: a full snapshot of tracked paths plus history edges.
///
/// `parent_1_id` is the previous head of the branch the commit was made on
/// (absent for a root commit, persisted as `""`). `parent_2_id` is present
/// only on merge commits and names the merged-in head. `file_hashes` maps
/// every tracked path to its blob hash; it is a complete snapshot, not a
/// delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub id: ObjectId,
    pub message: String,
    pub author: String,
    pub date: String,
    #[serde(with = "serde_oid::opt_empty")]
    pub parent_1_id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub parent_2_id: Option<ObjectId>,
    pub file_hashes: BTreeMap<String, ObjectId>,
}

/// The id-less view of a commit that the id is computed over.
///
/// Field order is fixed by this declaration; `file_hashes` iterates in key
/// order, so the serialization is canonical.
#[derive(Serialize)]
struct CommitPayload<'a> {
    message: &'a str,
    author: &'a str,
    date: &'a str,
    #[serde(with = "serde_oid::opt_empty")]
    parent_1_id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_2_id: Option<ObjectId>,
    file_hashes: &'a BTreeMap<String, ObjectId>,
}

impl Commit {
    /// Build a commit, deriving its id from the canonical serialization.
    pub fn new(
        message: impl Into<String>,
        author: impl Into<String>,
        date: impl Into<String>,
        parent_1_id: Option<ObjectId>,
        parent_2_id: Option<ObjectId>,
        file_hashes: BTreeMap<String, ObjectId>,
    ) -> Self {
        let mut commit = Self {
            // Placeholder until the payload is hashed below.
            id: Hasher::digest(b""),
            message: message.into(),
            author: author.into(),
            date: date.into(),
            parent_1_id,
            parent_2_id,
            file_hashes,
        };
        commit.id = commit.compute_id();
        commit
    }

    /// Serialize the id-less payload deterministically.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let payload = CommitPayload {
            message: &self.message,
            author: &self.author,
            date: &self.date,
            parent_1_id: self.parent_1_id,
            parent_2_id: self.parent_2_id,
            file_hashes: &self.file_hashes,
        };
        // Serializing a struct with only string/map fields cannot fail.
        serde_json::to_vec(&payload).unwrap_or_default()
    }

    /// Hash of the canonical payload.
    pub fn compute_id(&self) -> ObjectId {
        Hasher::digest(&self.canonical_bytes())
    }

    /// Check that the stored id matches the recomputed hash.
    pub fn verify(&self) -> Result<(), ObjectError> {
        let computed = self.compute_id();
        if computed != self.id {
            return Err(ObjectError::IdMismatch {
                stored: self.id.to_hex(),
                computed: computed.to_hex(),
            });
        }
        Ok(())
    }

    /// Serialize the full record (id included) for storage.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, ObjectError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Parse a stored record and check its id against the content.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, ObjectError> {
        let commit: Self = serde_json::from_slice(bytes)?;
        commit.verify()?;
        Ok(commit)
    }

    /// Blob hash of a path in this snapshot, if tracked.
    pub fn hash_of(&self, path: &str) -> Option<ObjectId> {
        self.file_hashes.get(path).copied()
    }
}
