use minigit_ref::{append_reflog_entry, BranchName, LogTarget, ReflogEntry};

use crate::{worktree, DirtyAction, DirtyTree, RepoError, Repository};

impl Repository {
    /// Switch to another branch, rewriting the working tree and index to
    /// its head commit's snapshot.
    ///
    /// The branch must exist and the working tree must be clean. Only the
    /// HEAD reflog records the switch; per-branch logs are untouched.
    pub fn checkout(&mut self, name: &BranchName) -> Result<(), RepoError> {
        let target_id = match self.refs().read(name)? {
            Some(id) => id,
            None => return Err(RepoError::BranchDoesNotExist),
        };

        let status = self.status()?;
        if !status.is_clean() {
            return Err(RepoError::DirtyWorkingTree(DirtyTree {
                action: DirtyAction::Checkout,
                staged: status.staged,
                modified: status.modified,
            }));
        }

        let source_id = self.head_id()?;
        let source_tree = self.head_commit()?.map(|c| c.file_hashes);
        let target = self.odb().get_commit(&target_id)?;

        worktree::materialize(
            self.work_dir(),
            self.odb(),
            source_tree.as_ref(),
            &target.file_hashes,
        )?;
        self.index_mut()?.replace(target.file_hashes);
        self.write_index()?;
        self.refs().set_head_branch(name)?;

        append_reflog_entry(
            self.repo_dir(),
            &LogTarget::Head,
            ReflogEntry::new(
                source_id,
                target_id,
                format!("Switched to branch {name}"),
            ),
        )?;
        Ok(())
    }
}
