use std::fmt;

/// Which interlocked verb found the working tree dirty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirtyAction {
    Checkout,
    Revert,
    Merge,
}

impl DirtyAction {
    fn phrase(self) -> &'static str {
        match self {
            DirtyAction::Checkout => "checkout another branch",
            DirtyAction::Revert => "revert",
            DirtyAction::Merge => "merge in branch",
        }
    }
}

/// A dirty-working-tree report: the interlock context plus the offending
/// paths, rendered exactly as the CLI prints them.
#[derive(Debug, Clone)]
pub struct DirtyTree {
    pub action: DirtyAction,
    pub staged: Vec<String>,
    pub modified: Vec<String>,
}

impl fmt::Display for DirtyTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ERROR: Cannot {} while there are modified or staged (uncommitted) files.",
            self.action.phrase()
        )?;
        if !self.staged.is_empty() {
            write!(f, "\nChanges to be committed:")?;
            for path in &self.staged {
                write!(f, "\n\t{path}")?;
            }
        }
        if !self.modified.is_empty() {
            write!(f, "\nChanges not staged for commit:")?;
            for path in &self.modified {
                write!(f, "\n\t{path}")?;
            }
        }
        Ok(())
    }
}

/// Error types for repository operations.
///
/// The `Display` strings of the user-facing variants are contractual: the
/// CLI prints them to stdout verbatim and exits 0. Only the wrapped
/// subsystem faults at the bottom are fatal.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Error: Repository not initialized.")]
    NotInitialized,

    #[error("Repository already initialized")]
    AlreadyInitialized,

    #[error("ERROR: file {0} did not match any files")]
    NoMatchingFile(String),

    #[error("Nothing to commit")]
    NothingToCommit,

    #[error("ERROR: Cannot create new branch since there are no commits on the current branch")]
    NoCommitsOnBranch,

    #[error("ERROR: A branch named {0} already exists")]
    BranchAlreadyExists(String),

    #[error("ERROR: Branch does not exist.")]
    BranchDoesNotExist,

    #[error("ERROR: no such branch: {0}")]
    NoSuchBranch(String),

    #[error("ERROR: no commits on the current branch")]
    UnbornBranch,

    #[error("{0}")]
    DirtyWorkingTree(DirtyTree),

    #[error("ERROR: commit id is not valid for this branch.")]
    InvalidCommitForBranch,

    #[error(transparent)]
    Ref(#[from] minigit_ref::RefError),

    #[error(transparent)]
    Index(#[from] minigit_index::IndexError),

    #[error(transparent)]
    Odb(#[from] minigit_odb::OdbError),

    #[error(transparent)]
    RevWalk(#[from] minigit_revwalk::RevWalkError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RepoError {
    /// Is this a handled user-facing condition (printed to stdout, exit 0)
    /// rather than an internal fault?
    pub fn is_user_error(&self) -> bool {
        !matches!(
            self,
            RepoError::Ref(_)
                | RepoError::Index(_)
                | RepoError::Odb(_)
                | RepoError::RevWalk(_)
                | RepoError::Io(_)
        )
    }
}
