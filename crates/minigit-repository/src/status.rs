use std::fs;

use minigit_hash::Hasher;
use minigit_utils::path as repo_path;

use crate::{merge_state, worktree, RepoError, Repository};

/// Classification of every working-tree path against the index and the
/// current head commit. Each list is sorted lexicographically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// Current branch name.
    pub branch: String,
    /// Changes to be committed: staged and differing from the head commit.
    pub staged: Vec<String>,
    /// Changes not staged for commit: on disk and differing from the index.
    pub modified: Vec<String>,
    /// On disk but unknown to both the index and the head commit.
    pub untracked: Vec<String>,
    /// A conflicted merge is awaiting resolution.
    pub merge_in_progress: bool,
}

impl Status {
    /// No staged and no modified paths: the interlock checkout, revert,
    /// and merge require.
    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.modified.is_empty()
    }

    /// Nothing to report in any category.
    pub fn is_empty(&self) -> bool {
        self.is_clean() && self.untracked.is_empty()
    }
}

impl Repository {
    /// Compute the working-tree status.
    pub fn status(&mut self) -> Result<Status, RepoError> {
        let branch = self.head_branch()?;
        let head = self.head_commit()?;
        let head_tree = head.map(|c| c.file_hashes);
        let index = self.index()?.clone();

        // Staged: in the index, and new or changed relative to the head.
        let mut staged = Vec::new();
        for (path, hash) in index.tracked_files() {
            let in_head = head_tree.as_ref().and_then(|tree| tree.get(path));
            if in_head != Some(hash) {
                staged.push(path.clone());
            }
        }

        // Modified / untracked: classify what is actually on disk.
        let mut modified = Vec::new();
        let mut untracked = Vec::new();
        for path in worktree::scan_files(self.work_dir())? {
            match index.hash_of(&path) {
                Some(staged_hash) => {
                    let data = fs::read(repo_path::to_fs_path(self.work_dir(), &path))?;
                    if Hasher::digest(&data) != staged_hash {
                        modified.push(path);
                    }
                }
                None => {
                    let in_head = head_tree
                        .as_ref()
                        .map(|tree| tree.contains_key(&path))
                        .unwrap_or(false);
                    if !in_head {
                        untracked.push(path);
                    }
                }
            }
        }

        Ok(Status {
            branch: branch.to_string(),
            staged,
            modified,
            untracked,
            merge_in_progress: merge_state::exists(self.repo_dir()),
        })
    }
}
