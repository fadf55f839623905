//! Merge engine: fast-forward detection, three-way tree merge, and
//! textual conflict handling.
//!
//! A merge resolves per path over the union of the base, current, and
//! other snapshots. Content equality is blob-hash equality; anything the
//! trivial rules cannot resolve becomes a conflict marker block in the
//! working tree, to be staged and committed by the user.

pub mod conflict;
mod tree;

pub use tree::{merge_path, merge_trees, ConflictSides, PathMerge, TreeMerge};

use minigit_hash::ObjectId;
use minigit_object::Commit;
use minigit_ref::{append_reflog_entry, BranchName, LogTarget, ReflogEntry};
use minigit_repository::{
    merge_state, worktree, DirtyAction, DirtyTree, MergeState, RepoError, Repository,
};
use minigit_revwalk::merge_base;
use minigit_utils::Identity;

/// How a merge concluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The other head equals the current head; nothing changed.
    AlreadyUpToDate,
    /// The current head was an ancestor of the other head; the branch
    /// pointer advanced without a new commit.
    FastForward { from: ObjectId, to: ObjectId },
    /// A merge commit was created.
    Merged { commit_id: ObjectId },
    /// Conflict markers were written; a sentinel awaits the resolving
    /// commit. This is a completed merge in conflicted state, not a
    /// failure.
    Conflicts { paths: Vec<String> },
}

/// Merge the named branch into the current one.
pub fn merge(repo: &mut Repository, name: &BranchName) -> Result<MergeOutcome, RepoError> {
    let other_id = repo
        .refs()
        .read(name)?
        .ok_or_else(|| RepoError::NoSuchBranch(name.to_string()))?;

    let status = repo.status()?;
    if !status.is_clean() {
        return Err(RepoError::DirtyWorkingTree(DirtyTree {
            action: DirtyAction::Merge,
            staged: status.staged,
            modified: status.modified,
        }));
    }

    let current_branch = repo.head_branch()?;
    let head_id = repo.head_id()?.ok_or(RepoError::UnbornBranch)?;

    if head_id == other_id {
        return Ok(MergeOutcome::AlreadyUpToDate);
    }

    let base_id = merge_base(repo.odb(), &head_id, &other_id)?;
    if base_id == Some(head_id) {
        return fast_forward(repo, &current_branch, head_id, other_id);
    }

    three_way(repo, &current_branch, name, base_id, head_id, other_id)
}

/// Advance the current branch to the other head and restore its tree.
fn fast_forward(
    repo: &mut Repository,
    current_branch: &BranchName,
    head_id: ObjectId,
    other_id: ObjectId,
) -> Result<MergeOutcome, RepoError> {
    let head_tree = repo.odb().get_commit(&head_id)?.file_hashes;
    let other = repo.odb().get_commit(&other_id)?;

    worktree::materialize(repo.work_dir(), repo.odb(), Some(&head_tree), &other.file_hashes)?;
    repo.index_mut()?.replace(other.file_hashes);
    repo.write_index()?;
    repo.refs().write(current_branch, &other_id)?;

    let entry = ReflogEntry::new(Some(head_id), other_id, other.message);
    append_reflog_entry(repo.repo_dir(), &LogTarget::Head, entry.clone())?;
    append_reflog_entry(
        repo.repo_dir(),
        &LogTarget::Branch(current_branch.clone()),
        entry,
    )?;

    Ok(MergeOutcome::FastForward {
        from: head_id,
        to: other_id,
    })
}

/// Run the per-path rules over the union of the three snapshots.
fn three_way(
    repo: &mut Repository,
    current_branch: &BranchName,
    other_branch: &BranchName,
    base_id: Option<ObjectId>,
    head_id: ObjectId,
    other_id: ObjectId,
) -> Result<MergeOutcome, RepoError> {
    let base_tree = match base_id {
        Some(id) => Some(repo.odb().get_commit(&id)?.file_hashes),
        None => None,
    };
    let head_tree = repo.odb().get_commit(&head_id)?.file_hashes;
    let other_tree = repo.odb().get_commit(&other_id)?.file_hashes;

    let result = merge_trees(base_tree.as_ref(), &head_tree, &other_tree);

    if result.conflicts.is_empty() {
        let ident = Identity::from_env();
        let message = format!("Merged {} into {}", other_branch, current_branch);

        worktree::materialize(repo.work_dir(), repo.odb(), Some(&head_tree), &result.merged)?;
        repo.index_mut()?.replace(result.merged.clone());
        repo.write_index()?;

        let commit = Commit::new(
            message.as_str(),
            ident.author,
            ident.date,
            Some(head_id),
            Some(other_id),
            result.merged,
        );
        repo.odb().put_commit(&commit)?;
        repo.refs().write(current_branch, &commit.id)?;

        let entry =
            ReflogEntry::new(Some(head_id), commit.id, message).with_merge(other_id);
        append_reflog_entry(repo.repo_dir(), &LogTarget::Head, entry.clone())?;
        append_reflog_entry(
            repo.repo_dir(),
            &LogTarget::Branch(current_branch.clone()),
            entry,
        )?;

        return Ok(MergeOutcome::Merged { commit_id: commit.id });
    }

    // Conflicted: write the whole merge result to the working tree
    // (cleanly merged content as-is, conflicted paths as marker blocks)
    // but leave the index untouched so everything written shows up as
    // not staged.
    for (path, hash) in &result.merged {
        let data = repo.odb().get_blob(hash)?;
        conflict::write_working_file(repo.work_dir(), path, &data)?;
    }
    let mut conflict_paths = Vec::with_capacity(result.conflicts.len());
    for (path, sides) in &result.conflicts {
        let ours = match sides.ours {
            Some(hash) => repo.odb().get_blob(&hash)?,
            None => Vec::new(),
        };
        let theirs = match sides.theirs {
            Some(hash) => repo.odb().get_blob(&hash)?,
            None => Vec::new(),
        };
        let block = conflict::conflict_block(&ours, &theirs);
        conflict::write_working_file(repo.work_dir(), path, &block)?;
        conflict_paths.push(path.clone());
    }

    merge_state::write(
        repo.repo_dir(),
        &MergeState {
            other_commit_id: other_id,
            branch: other_branch.to_string(),
        },
    )?;

    Ok(MergeOutcome::Conflicts {
        paths: conflict_paths,
    })
}
