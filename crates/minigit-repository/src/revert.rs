use minigit_hash::ObjectId;
use minigit_object::Commit;
use minigit_ref::{append_reflog_entry, LogTarget, ReflogEntry};
use minigit_revwalk::is_reachable;
use minigit_utils::Identity;

use crate::{worktree, DirtyAction, DirtyTree, RepoError, Repository};

impl Repository {
    /// Restore the working tree and index to an earlier commit's snapshot
    /// and record the restoration as a new commit.
    ///
    /// The target must be reachable from the current head through either
    /// parent edge. The new commit gets a fresh id; history only ever
    /// grows.
    pub fn revert(&mut self, id_text: &str) -> Result<ObjectId, RepoError> {
        let status = self.status()?;
        if !status.is_clean() {
            return Err(RepoError::DirtyWorkingTree(DirtyTree {
                action: DirtyAction::Revert,
                staged: status.staged,
                modified: status.modified,
            }));
        }

        let target_id = ObjectId::from_hex(id_text.trim())
            .map_err(|_| RepoError::InvalidCommitForBranch)?;
        let branch = self.head_branch()?;
        let head_id = self
            .head_id()?
            .ok_or(RepoError::InvalidCommitForBranch)?;
        if !is_reachable(self.odb(), &head_id, &target_id)? {
            return Err(RepoError::InvalidCommitForBranch);
        }

        let target = self.odb().get_commit(&target_id)?;
        let head_tree = self.odb().get_commit(&head_id)?.file_hashes;

        worktree::materialize(
            self.work_dir(),
            self.odb(),
            Some(&head_tree),
            &target.file_hashes,
        )?;
        self.index_mut()?.replace(target.file_hashes.clone());
        self.write_index()?;

        let ident = Identity::from_env();
        let message = format!("Reverting to {}", target_id.to_hex());
        let commit = Commit::new(
            message.as_str(),
            ident.author,
            ident.date,
            Some(head_id),
            None,
            target.file_hashes,
        );
        self.odb().put_commit(&commit)?;
        self.refs().write(&branch, &commit.id)?;

        let entry = ReflogEntry::new(Some(head_id), commit.id, message);
        append_reflog_entry(self.repo_dir(), &LogTarget::Head, entry.clone())?;
        append_reflog_entry(self.repo_dir(), &LogTarget::Branch(branch), entry)?;

        Ok(commit.id)
    }
}
