use std::fs;
use std::path::Path;

use minigit_hash::ObjectId;
use minigit_object::{Blob, Commit};

use crate::{ObjectStore, OdbError};

impl ObjectStore {
    /// Write a blob. Returns its id.
    ///
    /// No-op if the content is already stored (idempotent).
    /// The file is written atomically (temp file + rename).
    pub fn put_blob(&self, data: &[u8]) -> Result<ObjectId, OdbError> {
        let blob = Blob::new(data);
        let id = blob.id();
        if self.has_blob(&id) {
            return Ok(id);
        }
        self.persist(&self.blob_path(&id), &blob.data)?;
        Ok(id)
    }

    /// Write a commit record. Returns its id.
    ///
    /// No-op if a record with this id is already stored.
    pub fn put_commit(&self, commit: &Commit) -> Result<ObjectId, OdbError> {
        let id = commit.id;
        if self.has_commit(&id) {
            return Ok(id);
        }
        let bytes = commit.to_json_bytes().map_err(|e| OdbError::Corrupt {
            id: id.to_hex(),
            reason: e.to_string(),
        })?;
        self.persist(&self.commit_path(&id), &bytes)?;
        Ok(id)
    }

    /// Write `data` to `final_path` via a temp file in the objects dir
    /// (same filesystem for atomic rename).
    fn persist(&self, final_path: &Path, data: &[u8]) -> Result<(), OdbError> {
        if let Some(parent) = final_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.objects_dir().join(format!(
            "tmp_obj_{}",
            std::process::id()
                ^ std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .unwrap_or_default()
                    .subsec_nanos()
        ));
        fs::write(&tmp_path, data)?;

        match fs::rename(&tmp_path, final_path) {
            Ok(()) => Ok(()),
            Err(_) if final_path.exists() => {
                // Another writer won the race; content-addressing makes the
                // existing file equivalent.
                let _ = fs::remove_file(&tmp_path);
                Ok(())
            }
            Err(e) => {
                let _ = fs::remove_file(&tmp_path);
                Err(OdbError::Io(e))
            }
        }
    }
}
