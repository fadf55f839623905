use std::fs;
use std::path::{Path, PathBuf};

use minigit_index::{Index, INDEX_FILE};

use crate::{RepoError, REPO_DIR};

/// Name of the branch a fresh repository starts on.
pub const DEFAULT_BRANCH: &str = "master";

/// Create the `.minigit` directory scaffolding.
///
/// Layout:
/// ```text
/// .minigit/
///   HEAD                 (= "master", no trailing newline)
///   index.json           (empty index)
///   refs/heads/
///   logs/refs/heads/
///   objects/blobs/
///   objects/commits/
/// ```
pub(crate) fn init_repository(work_dir: &Path) -> Result<PathBuf, RepoError> {
    let repo_dir = work_dir.join(REPO_DIR);
    if repo_dir.exists() {
        return Err(RepoError::AlreadyInitialized);
    }

    fs::create_dir_all(repo_dir.join("objects").join("blobs"))?;
    fs::create_dir_all(repo_dir.join("objects").join("commits"))?;
    fs::create_dir_all(repo_dir.join("refs").join("heads"))?;
    fs::create_dir_all(repo_dir.join("logs").join("refs").join("heads"))?;

    fs::write(repo_dir.join("HEAD"), DEFAULT_BRANCH)?;
    Index::new().write_to(&repo_dir.join(INDEX_FILE))?;

    Ok(repo_dir)
}
