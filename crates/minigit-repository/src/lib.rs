//! Repository façade tying all subsystems together.
//!
//! Every user verb goes through [`Repository`]: it validates the
//! cross-cutting preconditions (repository initialized, working tree
//! clean, ref exists), consults the working tree, index, and ref store,
//! and publishes mutations as a sequence of idempotent writes (blob,
//! then commit, then ref, then reflog).

mod add;
mod branch;
mod checkout;
mod commit;
mod error;
mod init;
pub mod merge_state;
mod revert;
mod status;
pub mod worktree;

pub use commit::CommitOutcome;
pub use error::{DirtyAction, DirtyTree, RepoError};
pub use merge_state::MergeState;
pub use status::Status;

use std::path::{Path, PathBuf};

use minigit_hash::ObjectId;
use minigit_index::{Index, INDEX_FILE};
use minigit_object::Commit;
use minigit_odb::ObjectStore;
use minigit_ref::{BranchName, FilesRefStore};

/// Name of the repository directory under the working directory.
pub const REPO_DIR: &str = ".minigit";

/// The central repository handle.
pub struct Repository {
    /// The user's working directory.
    work_dir: PathBuf,
    /// The `.minigit` directory inside it.
    repo_dir: PathBuf,
    /// Object database.
    odb: ObjectStore,
    /// Reference store.
    refs: FilesRefStore,
    /// Index (lazy-loaded). None means not yet loaded.
    index: Option<Index>,
    /// Path to the index file.
    index_path: PathBuf,
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("work_dir", &self.work_dir)
            .finish_non_exhaustive()
    }
}

impl Repository {
    /// Open an existing repository rooted at `work_dir`.
    pub fn open(work_dir: impl AsRef<Path>) -> Result<Self, RepoError> {
        let work_dir = work_dir.as_ref().to_path_buf();
        let repo_dir = work_dir.join(REPO_DIR);
        if !repo_dir.is_dir() {
            return Err(RepoError::NotInitialized);
        }
        Ok(Self::from_dirs(work_dir, repo_dir))
    }

    /// Initialize a new repository at `work_dir` and open it.
    pub fn init(work_dir: impl AsRef<Path>) -> Result<Self, RepoError> {
        let work_dir = work_dir.as_ref().to_path_buf();
        let repo_dir = init::init_repository(&work_dir)?;
        Ok(Self::from_dirs(work_dir, repo_dir))
    }

    fn from_dirs(work_dir: PathBuf, repo_dir: PathBuf) -> Self {
        let odb = ObjectStore::new(&repo_dir);
        let refs = FilesRefStore::new(&repo_dir);
        let index_path = repo_dir.join(INDEX_FILE);
        Self {
            work_dir,
            repo_dir,
            odb,
            refs,
            index: None,
            index_path,
        }
    }

    // --- Path accessors ---

    /// The user's working directory.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// The `.minigit` directory.
    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }

    // --- Subsystem accessors ---

    /// Access the object database.
    pub fn odb(&self) -> &ObjectStore {
        &self.odb
    }

    /// Access the reference store.
    pub fn refs(&self) -> &FilesRefStore {
        &self.refs
    }

    /// Access the index (lazy-loaded).
    pub fn index(&mut self) -> Result<&Index, RepoError> {
        self.load_index()?;
        Ok(self.index.as_ref().expect("index loaded above"))
    }

    /// Access the index mutably (lazy-loaded).
    pub fn index_mut(&mut self) -> Result<&mut Index, RepoError> {
        self.load_index()?;
        Ok(self.index.as_mut().expect("index loaded above"))
    }

    /// Write the in-memory index back to disk.
    pub fn write_index(&self) -> Result<(), RepoError> {
        if let Some(ref index) = self.index {
            index.write_to(&self.index_path)?;
        }
        Ok(())
    }

    fn load_index(&mut self) -> Result<(), RepoError> {
        if self.index.is_none() {
            self.index = Some(Index::read_from(&self.index_path)?);
        }
        Ok(())
    }

    // --- Head helpers ---

    /// The branch HEAD currently names.
    pub fn head_branch(&self) -> Result<BranchName, RepoError> {
        Ok(self.refs.head_branch()?)
    }

    /// The current branch's head commit id (`None` on an unborn branch).
    pub fn head_id(&self) -> Result<Option<ObjectId>, RepoError> {
        let branch = self.head_branch()?;
        Ok(self.refs.read(&branch)?)
    }

    /// The current branch's head commit (`None` on an unborn branch).
    pub fn head_commit(&self) -> Result<Option<Commit>, RepoError> {
        match self.head_id()? {
            Some(id) => Ok(Some(self.odb.get_commit(&id)?)),
            None => Ok(None),
        }
    }

    /// History from the current head via first parents, newest first.
    pub fn history(&self) -> Result<Vec<Commit>, RepoError> {
        let mut commits = Vec::new();
        for commit in minigit_revwalk::FirstParentWalk::new(&self.odb, self.head_id()?) {
            commits.push(commit?);
        }
        Ok(commits)
    }
}
