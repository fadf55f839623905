use std::fs;
use std::io::ErrorKind;

use minigit_hash::ObjectId;
use minigit_object::Commit;

use crate::{ObjectStore, OdbError};

impl ObjectStore {
    /// Read a blob's raw bytes.
    ///
    /// A missing blob is reported as corruption: every id handed to this
    /// store was produced by a successful put.
    pub fn get_blob(&self, id: &ObjectId) -> Result<Vec<u8>, OdbError> {
        match fs::read(self.blob_path(id)) {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(OdbError::Corrupt {
                id: id.to_hex(),
                reason: "blob missing from object store".to_string(),
            }),
            Err(e) => Err(OdbError::Io(e)),
        }
    }

    /// Read a commit record, checking that the stored id matches both the
    /// requested id and the recomputed content hash.
    pub fn get_commit(&self, id: &ObjectId) -> Result<Commit, OdbError> {
        let bytes = match fs::read(self.commit_path(id)) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(OdbError::Corrupt {
                    id: id.to_hex(),
                    reason: "commit missing from object store".to_string(),
                })
            }
            Err(e) => return Err(OdbError::Io(e)),
        };

        let commit = Commit::from_json_bytes(&bytes).map_err(|e| OdbError::Corrupt {
            id: id.to_hex(),
            reason: e.to_string(),
        })?;

        if commit.id != *id {
            return Err(OdbError::Corrupt {
                id: id.to_hex(),
                reason: format!("record stored under {} carries id {}", id, commit.id),
            });
        }

        Ok(commit)
    }
}
