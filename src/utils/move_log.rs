use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use chrono::Local;

/// Append-only, timestamped log of moves and failures.
///
/// Writing is best effort; any IO error is dropped.
pub struct MoveLog {
    path: Option<PathBuf>,
}

impl MoveLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// A log that writes nowhere.
    pub fn disabled() -> Self {
        Self { path: None }
    }

    pub fn write(&self, message: &str) {
        if let Some(path) = &self.path {
            let _ = Self::append(path, message);
        }
    }

    fn append(path: &Path, message: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}: {}", Local::now().format("%Y-%m-%d %H:%M:%S"), message)
    }
}
