//! Conflict marker emission.

use std::fs;
use std::path::Path;

use minigit_repository::RepoError;
use minigit_utils::path as repo_path;

/// Build the conflict block for a path both sides disagree on.
///
/// The format is fixed and compared byte-exact by consumers:
/// `<<<<<<< HEAD\n<ours>\n=======\n<theirs>\n>>>>>>> MERGE\n`.
/// A side missing the path contributes empty text.
pub fn conflict_block(ours: &[u8], theirs: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(ours.len() + theirs.len() + 40);
    out.extend_from_slice(b"<<<<<<< HEAD\n");
    out.extend_from_slice(ours);
    out.extend_from_slice(b"\n=======\n");
    out.extend_from_slice(theirs);
    out.extend_from_slice(b"\n>>>>>>> MERGE\n");
    out
}

/// Write merge output (merged content or a conflict block) to a
/// working-tree path, creating parent directories as needed.
pub fn write_working_file(
    work_dir: &Path,
    path: &str,
    content: &[u8],
) -> Result<(), RepoError> {
    let fs_path = repo_path::to_fs_path(work_dir, path);
    if let Some(parent) = fs_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&fs_path, content)?;
    Ok(())
}
