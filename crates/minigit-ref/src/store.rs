use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use minigit_hash::ObjectId;

use crate::{BranchName, RefError};

/// Loose-file reference storage rooted at the repository directory.
#[derive(Debug, Clone)]
pub struct FilesRefStore {
    repo_dir: PathBuf,
}

impl FilesRefStore {
    /// Open the ref store under a repository directory (the `.minigit` dir).
    pub fn new(repo_dir: &Path) -> Self {
        Self {
            repo_dir: repo_dir.to_path_buf(),
        }
    }

    fn branch_path(&self, name: &BranchName) -> PathBuf {
        self.repo_dir.join("refs").join("heads").join(name.as_str())
    }

    fn head_path(&self) -> PathBuf {
        self.repo_dir.join("HEAD")
    }

    /// Read a branch's commit id, or `None` if the ref file does not exist
    /// (an unborn branch).
    pub fn read(&self, name: &BranchName) -> Result<Option<ObjectId>, RefError> {
        let contents = match fs::read_to_string(self.branch_path(name)) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(RefError::Io(e)),
        };
        let id = ObjectId::from_hex(contents.trim_end())
            .map_err(|e| RefError::Parse(format!("ref {}: {}", name, e)))?;
        Ok(Some(id))
    }

    /// Point a branch at a commit id, creating the ref file if needed.
    /// The file holds exactly the 40-char hex id, no trailing newline.
    pub fn write(&self, name: &BranchName, id: &ObjectId) -> Result<(), RefError> {
        let path = self.branch_path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, id.to_hex())?;
        Ok(())
    }

    /// Does the branch's ref file exist?
    pub fn exists(&self, name: &BranchName) -> bool {
        self.branch_path(name).is_file()
    }

    /// All branch names in lexicographic order.
    pub fn list_branches(&self) -> Result<Vec<String>, RefError> {
        let heads = self.repo_dir.join("refs").join("heads");
        let entries = match fs::read_dir(&heads) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(RefError::Io(e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    /// The branch HEAD currently names.
    pub fn head_branch(&self) -> Result<BranchName, RefError> {
        let contents = fs::read_to_string(self.head_path())?;
        BranchName::new(contents.trim_end())
    }

    /// Repoint HEAD at a branch. Does not touch the working tree or index;
    /// callers combine this with tree and index restoration.
    pub fn set_head_branch(&self, name: &BranchName) -> Result<(), RefError> {
        fs::write(self.head_path(), name.as_str())?;
        Ok(())
    }
}
