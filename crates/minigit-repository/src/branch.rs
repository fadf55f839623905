use minigit_ref::{append_reflog_entry, BranchName, LogTarget, ReflogEntry};

use crate::{RepoError, Repository};

impl Repository {
    /// All branch names in lexicographic order.
    pub fn list_branches(&self) -> Result<Vec<String>, RepoError> {
        Ok(self.refs().list_branches()?)
    }

    /// Create a branch pointing at the current head.
    ///
    /// Requires at least one commit on the current branch. Seeds the new
    /// branch's reflog with the head commit's message; does not switch
    /// branches and does not touch the HEAD log.
    pub fn create_branch(&mut self, name: &BranchName) -> Result<(), RepoError> {
        let head_id = self.head_id()?.ok_or(RepoError::NoCommitsOnBranch)?;
        if self.refs().exists(name) {
            return Err(RepoError::BranchAlreadyExists(name.to_string()));
        }

        let head_commit = self.odb().get_commit(&head_id)?;
        self.refs().write(name, &head_id)?;
        append_reflog_entry(
            self.repo_dir(),
            &LogTarget::Branch(name.clone()),
            ReflogEntry::new(None, head_id, head_commit.message),
        )?;
        Ok(())
    }
}
