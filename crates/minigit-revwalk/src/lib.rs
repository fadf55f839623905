//! History traversal over the commit DAG.
//!
//! Commits reference each other only by string id; every edge is resolved
//! through the object store, so the graph is walked without in-memory
//! cycles. Provides the first-parent walk used by `log`, reachability for
//! `revert`, and the merge-base search used by `merge`.

mod merge_base;
mod walk;

pub use merge_base::{is_reachable, merge_base};
pub use walk::FirstParentWalk;

/// Error types for revision walking.
#[derive(Debug, thiserror::Error)]
pub enum RevWalkError {
    #[error(transparent)]
    Odb(#[from] minigit_odb::OdbError),
}
