//! Working-tree observation and rewriting.
//!
//! The working tree is the user's directory minus `.minigit/`. MiniGit does
//! not own it: it is scanned for status and rewritten wholesale on
//! checkout, revert, and merge.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use minigit_hash::ObjectId;
use minigit_odb::ObjectStore;
use minigit_utils::path as repo_path;
use walkdir::WalkDir;

use crate::{RepoError, REPO_DIR};

/// Enumerate every file under `work_dir` (recursively, excluding the
/// repository directory) as repository paths in lexicographic order.
pub fn scan_files(work_dir: &Path) -> Result<BTreeSet<String>, RepoError> {
    let mut files = BTreeSet::new();
    let walker = WalkDir::new(work_dir)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| e.file_name() != REPO_DIR);

    for entry in walker {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(work_dir)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .into_owned();
        files.insert(repo_path::to_repo_path(&relative));
    }
    Ok(files)
}

/// Rewrite the working tree from `old_tree` to `new_tree`.
///
/// Every blob in `new_tree` is written to its path; paths present in
/// `old_tree` but absent from `new_tree` are deleted. Untracked files are
/// left alone.
pub fn materialize(
    work_dir: &Path,
    store: &ObjectStore,
    old_tree: Option<&BTreeMap<String, ObjectId>>,
    new_tree: &BTreeMap<String, ObjectId>,
) -> Result<(), RepoError> {
    for (path, hash) in new_tree {
        let data = store.get_blob(hash)?;
        let fs_path = repo_path::to_fs_path(work_dir, path);
        if let Some(parent) = fs_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&fs_path, data)?;
    }

    if let Some(old_tree) = old_tree {
        for path in old_tree.keys() {
            if !new_tree.contains_key(path) {
                let fs_path = repo_path::to_fs_path(work_dir, path);
                if fs_path.is_file() {
                    fs::remove_file(&fs_path)?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_skips_repo_dir_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(REPO_DIR)).unwrap();
        fs::write(dir.path().join(REPO_DIR).join("HEAD"), "master").unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("c.txt"), "").unwrap();

        let files: Vec<String> = scan_files(dir.path()).unwrap().into_iter().collect();
        assert_eq!(files, vec!["a.txt", "b.txt", "sub/c.txt"]);
    }

    #[test]
    fn materialize_writes_and_deletes() {
        let dir = tempfile::tempdir().unwrap();
        let store = ObjectStore::new(&dir.path().join(REPO_DIR));

        let mut old_tree = BTreeMap::new();
        old_tree.insert("gone.txt".to_string(), store.put_blob(b"old").unwrap());
        fs::write(dir.path().join("gone.txt"), "old").unwrap();

        let mut new_tree = BTreeMap::new();
        new_tree.insert("kept.txt".to_string(), store.put_blob(b"kept").unwrap());

        materialize(dir.path(), &store, Some(&old_tree), &new_tree).unwrap();
        assert!(!dir.path().join("gone.txt").exists());
        assert_eq!(fs::read_to_string(dir.path().join("kept.txt")).unwrap(), "kept");
    }

    #[test]
    fn materialize_leaves_untracked_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = ObjectStore::new(&dir.path().join(REPO_DIR));
        fs::write(dir.path().join("untracked.txt"), "mine").unwrap();

        materialize(dir.path(), &store, None, &BTreeMap::new()).unwrap();
        assert!(dir.path().join("untracked.txt").exists());
    }
}
