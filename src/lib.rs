use std::path::PathBuf;

pub mod audio;
pub mod cli;
pub mod sorting;
pub mod utils;

/// Tags needed to place a track in the destination hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackMetadata {
    pub primary_artist: String,
    pub album: String,
    pub title: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SortError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Metadata extraction error: {0}")]
    Metadata(String),
    #[error("Can't read enough information to sort {path}: missing {missing}")]
    MetadataIncomplete { path: PathBuf, missing: String },
    #[error("Can't move file {from} to {to} because {source}")]
    MoveFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Parent directory of {0} does not exist")]
    PreconditionViolation(PathBuf),
    #[error("Invalid format pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, SortError>;

// Re-exports for convenience
pub use audio::formats::FormatMatcher;
pub use audio::metadata::{MetadataExtractor, MetadataSource, RawTags};
pub use sorting::distance::damerau_levenshtein;
pub use sorting::path_builder::{Bucket, PathBuilder, SortConfig};
pub use sorting::resolver::{CandidateFolder, CandidateSelector, FolderResolver, ResolutionDecision};
pub use sorting::sanitize::sanitize_dir_name;
pub use sorting::sorter::{LibrarySorter, MoveOutcome, MoveRecord, SortSummary};
