use std::path::{Path, PathBuf};
use std::fs;
use crate::{Result, SortError};

/// Filesystem operations used while sorting.
pub struct FileManager;

impl FileManager {
    pub fn new() -> Self {
        Self
    }

    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        path.as_ref().is_dir()
    }

    /// Immediate child directories of `parent` as `(path, name)` pairs, in
    /// directory listing order. Regular files are skipped.
    pub fn child_dirs(&self, parent: impl AsRef<Path>) -> Result<Vec<(PathBuf, String)>> {
        let mut dirs = Vec::new();
        for entry in fs::read_dir(parent.as_ref())? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            dirs.push((entry.path(), name));
        }
        Ok(dirs)
    }

    /// Create `path` and any missing parents; no error if it already exists.
    pub fn ensure_directory(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::create_dir_all(path.as_ref())?;
        Ok(())
    }

    /// Rename `from` to `to`. An existing file at `to` is never overwritten.
    pub fn move_file(&self, from: impl AsRef<Path>, to: impl AsRef<Path>) -> Result<()> {
        let from = from.as_ref();
        let to = to.as_ref();

        let failed = |source| SortError::MoveFailed {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        };

        if to.exists() {
            return Err(failed(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "destination file already exists",
            )));
        }

        fs::rename(from, to).map_err(failed)
    }
}

impl Default for FileManager {
    fn default() -> Self {
        Self::new()
    }
}
