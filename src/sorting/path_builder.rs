use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use log::debug;
use crate::sorting::resolver::{CandidateSelector, FolderResolver};
use crate::sorting::sanitize::sanitize_dir_name;
use crate::utils::file_ops::FileManager;
use crate::{Result, TrackMetadata};

pub const DEFAULT_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZÖÄÜ";
pub const DEFAULT_NUMERIC_BUCKET: &str = "0-9";
pub const DEFAULT_UNSORTABLE_BUCKET: &str = "_unsortable";
pub const DEFAULT_THRESHOLD: usize = 3;

/// Settings shared by one sorting run.
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// Upper-case letters that get their own top-level bucket.
    pub alphabet: String,
    pub numeric_bucket: String,
    pub unsortable_bucket: String,
    /// Highest edit distance at which an existing folder counts as a near duplicate.
    pub threshold: usize,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.to_string(),
            numeric_bucket: DEFAULT_NUMERIC_BUCKET.to_string(),
            unsortable_bucket: DEFAULT_UNSORTABLE_BUCKET.to_string(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Top-level destination folder a track falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Letter(char),
    Numeric,
    Unsortable,
}

impl SortConfig {
    /// Classify by the first character of the primary artist.
    pub fn classify(&self, artist: &str) -> Bucket {
        let Some(first) = artist.chars().next() else {
            return Bucket::Unsortable;
        };

        let mut upper = first.to_uppercase();
        if let (Some(letter), None) = (upper.next(), upper.next()) {
            if self.alphabet.contains(letter) {
                return Bucket::Letter(letter);
            }
        }

        if first.is_numeric() {
            Bucket::Numeric
        } else {
            Bucket::Unsortable
        }
    }

    pub fn bucket_name(&self, bucket: Bucket) -> String {
        match bucket {
            Bucket::Letter(letter) => letter.to_string(),
            Bucket::Numeric => self.numeric_bucket.clone(),
            Bucket::Unsortable => self.unsortable_bucket.clone(),
        }
    }

    /// Every bucket folder name, letters first.
    pub fn bucket_names(&self) -> Vec<String> {
        self.alphabet
            .chars()
            .map(|c| c.to_string())
            .chain([self.numeric_bucket.clone(), self.unsortable_bucket.clone()])
            .collect()
    }
}

/// Composes `root/bucket/artist/album/file` destinations.
pub struct PathBuilder {
    config: SortConfig,
    resolver: FolderResolver,
    files: FileManager,
}

impl PathBuilder {
    pub fn new(config: SortConfig) -> Self {
        let resolver = FolderResolver::new(config.threshold);
        Self {
            config,
            resolver,
            files: FileManager::new(),
        }
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Create the letter, numeric and unsortable buckets under `root`.
    pub fn prepare_buckets(&self, root: &Path) -> Result<()> {
        for name in self.config.bucket_names() {
            self.files.ensure_directory(root.join(name))?;
        }
        Ok(())
    }

    /// Destination for a file named `file_name`, creating or reusing the
    /// artist and album folders on the way.
    ///
    /// Unsortable artists go straight to the unsortable bucket without any
    /// folder matching.
    pub fn build_destination(
        &self,
        meta: &TrackMetadata,
        root: &Path,
        file_name: &OsStr,
        selector: &mut dyn CandidateSelector,
    ) -> Result<PathBuf> {
        let bucket = self.config.classify(&meta.primary_artist);
        let bucket_dir = root.join(self.config.bucket_name(bucket));
        debug!("{} sorts into {}", meta.primary_artist, bucket_dir.display());

        if bucket == Bucket::Unsortable {
            return Ok(bucket_dir.join(file_name));
        }

        let artist_dir = self
            .resolver
            .resolve(&bucket_dir.join(sanitize_dir_name(&meta.primary_artist)), selector)?
            .into_path();
        let album_dir = self
            .resolver
            .resolve(&artist_dir.join(sanitize_dir_name(&meta.album)), selector)?
            .into_path();

        Ok(album_dir.join(file_name))
    }
}
