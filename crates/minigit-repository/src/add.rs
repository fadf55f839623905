use minigit_utils::path as repo_path;

use crate::{RepoError, Repository};

impl Repository {
    /// Stage the named working-tree files for the next commit.
    ///
    /// Every path is checked for existence before anything is staged, so a
    /// bad argument leaves the index untouched. Returns the normalized
    /// paths in argument order.
    pub fn add(&mut self, user_paths: &[String]) -> Result<Vec<String>, RepoError> {
        for user_path in user_paths {
            let path = repo_path::to_repo_path(user_path);
            if !repo_path::to_fs_path(self.work_dir(), &path).is_file() {
                return Err(RepoError::NoMatchingFile(path));
            }
        }

        let work_dir = self.work_dir().to_path_buf();
        let store = self.odb().clone();
        let index = self.index_mut()?;

        let mut added = Vec::with_capacity(user_paths.len());
        for user_path in user_paths {
            let (path, _) = index.stage(&work_dir, &store, user_path)?;
            added.push(path);
        }
        self.write_index()?;
        Ok(added)
    }
}
