use minigit_hash::ObjectId;
use minigit_object::Commit;
use minigit_odb::ObjectStore;

use crate::RevWalkError;

/// Iterator over history following `parent_1_id` only, newest first.
///
/// Merge commits are traversed through their first parent; the merged-in
/// side is not descended into.
pub struct FirstParentWalk<'a> {
    store: &'a ObjectStore,
    next: Option<ObjectId>,
}

impl<'a> FirstParentWalk<'a> {
    /// Start a walk from `head` (or nothing, for an unborn branch).
    pub fn new(store: &'a ObjectStore, head: Option<ObjectId>) -> Self {
        Self { store, next: head }
    }
}

impl Iterator for FirstParentWalk<'_> {
    type Item = Result<Commit, RevWalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.take()?;
        match self.store.get_commit(&id) {
            Ok(commit) => {
                self.next = commit.parent_1_id;
                Some(Ok(commit))
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}
