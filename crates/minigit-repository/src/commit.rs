use minigit_hash::ObjectId;
use minigit_object::Commit;
use minigit_ref::{append_reflog_entry, LogTarget, ReflogEntry};
use minigit_utils::Identity;

use crate::{merge_state, RepoError, Repository};

/// Result of a successful commit.
#[derive(Debug, Clone)]
pub struct CommitOutcome {
    /// Id of the new commit.
    pub id: ObjectId,
    /// Paths whose hash changed relative to the previous commit
    /// (all paths on a first commit), sorted.
    pub changed: Vec<String>,
}

impl Repository {
    /// Record the staged snapshot as a new commit on the current branch.
    ///
    /// When a conflicted merge is pending, the new commit carries the
    /// merged-in head as `parent_2_id` and the sentinel is consumed.
    pub fn commit(&mut self, message: &str) -> Result<CommitOutcome, RepoError> {
        let branch = self.head_branch()?;
        let head_id = self.head_id()?;
        let head_commit = self.head_commit()?;
        let snapshot = self.index()?.snapshot();

        let changed: Vec<String> = snapshot
            .iter()
            .filter(|(path, hash)| {
                head_commit
                    .as_ref()
                    .and_then(|c| c.hash_of(path))
                    .map_or(true, |head_hash| head_hash != **hash)
            })
            .map(|(path, _)| path.clone())
            .collect();
        if changed.is_empty() {
            return Err(RepoError::NothingToCommit);
        }

        let pending_merge = merge_state::read(self.repo_dir())?;
        let ident = Identity::from_env();
        let commit = Commit::new(
            message,
            ident.author,
            ident.date,
            head_id,
            pending_merge.as_ref().map(|m| m.other_commit_id),
            snapshot,
        );
        self.odb().put_commit(&commit)?;
        self.refs().write(&branch, &commit.id)?;

        let mut entry = ReflogEntry::new(head_id, commit.id, message);
        if let Some(ref pending) = pending_merge {
            entry = entry.with_merge(pending.other_commit_id);
        }
        append_reflog_entry(self.repo_dir(), &LogTarget::Head, entry.clone())?;
        append_reflog_entry(self.repo_dir(), &LogTarget::Branch(branch), entry)?;

        if pending_merge.is_some() {
            merge_state::clear(self.repo_dir())?;
        }

        Ok(CommitOutcome {
            id: commit.id,
            changed,
        })
    }
}
