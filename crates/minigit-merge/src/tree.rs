use std::collections::{BTreeMap, BTreeSet};

use minigit_hash::ObjectId;

/// Resolution of a single path in a three-way merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathMerge {
    /// Resolved to this blob (`None` = path absent from the merged tree).
    Keep(Option<ObjectId>),
    /// Both sides changed the path in different ways.
    Conflict(ConflictSides),
}

/// The two competing versions of a conflicted path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConflictSides {
    pub ours: Option<ObjectId>,
    pub theirs: Option<ObjectId>,
}

/// Resolve one path given its blob hashes in base, ours, and theirs
/// (absent = `None`). With no common ancestor the caller passes
/// `base = None` throughout, which degrades to the two-way rules: a path
/// on only one side is taken, differing content on both sides conflicts.
pub fn merge_path(
    base: Option<ObjectId>,
    ours: Option<ObjectId>,
    theirs: Option<ObjectId>,
) -> PathMerge {
    if ours == theirs {
        return PathMerge::Keep(ours);
    }
    if base == ours {
        // Only the other side changed it.
        return PathMerge::Keep(theirs);
    }
    if base == theirs {
        // Only our side changed it.
        return PathMerge::Keep(ours);
    }
    PathMerge::Conflict(ConflictSides { ours, theirs })
}

/// Result of merging three snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeMerge {
    /// The resolved tree (paths the merge keeps, with their blobs).
    pub merged: BTreeMap<String, ObjectId>,
    /// Conflicted paths with both competing versions, in path order.
    pub conflicts: BTreeMap<String, ConflictSides>,
}

/// Merge over the union of paths in the three snapshots.
pub fn merge_trees(
    base: Option<&BTreeMap<String, ObjectId>>,
    ours: &BTreeMap<String, ObjectId>,
    theirs: &BTreeMap<String, ObjectId>,
) -> TreeMerge {
    let mut paths: BTreeSet<&String> = BTreeSet::new();
    if let Some(base) = base {
        paths.extend(base.keys());
    }
    paths.extend(ours.keys());
    paths.extend(theirs.keys());

    let mut result = TreeMerge::default();
    for path in paths {
        let b = base.and_then(|tree| tree.get(path)).copied();
        let c = ours.get(path).copied();
        let o = theirs.get(path).copied();
        match merge_path(b, c, o) {
            PathMerge::Keep(Some(hash)) => {
                result.merged.insert(path.clone(), hash);
            }
            PathMerge::Keep(None) => {}
            PathMerge::Conflict(sides) => {
                result.conflicts.insert(path.clone(), sides);
            }
        }
    }
    result
}
