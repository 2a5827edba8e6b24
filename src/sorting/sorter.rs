use std::path::{Path, PathBuf};
use log::{error, info, warn};
use serde::Serialize;
use crate::audio::formats::FormatMatcher;
use crate::audio::metadata::{MetadataExtractor, MetadataSource, RawTags};
use crate::sorting::path_builder::{PathBuilder, SortConfig};
use crate::sorting::resolver::CandidateSelector;
use crate::utils::file_ops::FileManager;
use crate::utils::move_log::MoveLog;
use crate::utils::parallel::ParallelProcessor;
use crate::{Result, SortError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoveOutcome {
    Moved,
    Skipped,
    Failed,
}

/// What happened to one discovered file.
#[derive(Debug, Clone, Serialize)]
pub struct MoveRecord {
    pub source: PathBuf,
    pub destination: Option<PathBuf>,
    pub outcome: MoveOutcome,
    pub detail: String,
}

#[derive(Debug, Default)]
pub struct SortSummary {
    pub discovered: usize,
    pub moved: usize,
    pub skipped: usize,
    pub failed: usize,
    pub records: Vec<MoveRecord>,
}

impl SortSummary {
    fn push(&mut self, record: MoveRecord) {
        match record.outcome {
            MoveOutcome::Moved => self.moved += 1,
            MoveOutcome::Skipped => self.skipped += 1,
            MoveOutcome::Failed => self.failed += 1,
        }
        self.records.push(record);
    }
}

/// Moves every audio file below a source directory into the sorted
/// destination tree.
///
/// Tags are read in parallel up front; destinations are resolved and files
/// moved strictly one at a time, so each resolution sees the folders created
/// for the previous files.
pub struct LibrarySorter<M: MetadataSource = MetadataExtractor> {
    builder: PathBuilder,
    formats: FormatMatcher,
    metadata: M,
    files: FileManager,
    log: MoveLog,
}

impl<M: MetadataSource> ParallelProcessor for LibrarySorter<M> {}

impl<M: MetadataSource> LibrarySorter<M> {
    pub fn new(config: SortConfig, formats: FormatMatcher, metadata: M, log: MoveLog) -> Self {
        Self {
            builder: PathBuilder::new(config),
            formats,
            metadata,
            files: FileManager::new(),
            log,
        }
    }

    pub fn run(
        &self,
        source_dir: &Path,
        destination_dir: &Path,
        selector: &mut dyn CandidateSelector,
    ) -> Result<SortSummary> {
        println!("\nCreating Directories.");
        self.builder.prepare_buckets(destination_dir)?;

        let files = MetadataExtractor::collect_audio_files(source_dir, &self.formats);
        println!("Found {} files.", files.len());

        Self::init_parallel_processing();
        let tags = Self::parallel_map(&files, |path| self.metadata.read_tags(path));

        let mut summary = SortSummary {
            discovered: files.len(),
            ..Default::default()
        };

        for (file, tags) in files.iter().zip(tags) {
            let record = match self.sort_file(file, tags, destination_dir, selector) {
                Ok(record) => record,
                Err(e @ SortError::PreconditionViolation(_)) => {
                    error!("Aborting: {}", e);
                    return Err(e);
                }
                Err(e) => self.failure(file, None, e),
            };
            summary.push(record);
        }

        info!(
            "Sorted {} files: {} moved, {} skipped, {} failed",
            summary.discovered, summary.moved, summary.skipped, summary.failed
        );
        Ok(summary)
    }

    fn sort_file(
        &self,
        file: &Path,
        tags: Result<RawTags>,
        destination_dir: &Path,
        selector: &mut dyn CandidateSelector,
    ) -> Result<MoveRecord> {
        let track = match tags.and_then(|tags| tags.into_track(file)) {
            Ok(track) => track,
            Err(e) => {
                warn!("{}", e);
                self.log.write(&format!("Can't sort {} because {}", file.display(), e));
                return Ok(MoveRecord {
                    source: file.to_path_buf(),
                    destination: None,
                    outcome: MoveOutcome::Skipped,
                    detail: e.to_string(),
                });
            }
        };

        let file_name = file
            .file_name()
            .ok_or_else(|| SortError::Metadata(format!("{} has no file name", file.display())))?;
        let destination = self
            .builder
            .build_destination(&track, destination_dir, file_name, selector)?;

        match self.files.move_file(file, &destination) {
            Ok(()) => {
                info!(
                    "Moved {} with Title: {} and artist: {} and Album: {} to {}",
                    file_name.to_string_lossy(),
                    track.title,
                    track.primary_artist,
                    track.album,
                    destination.display()
                );
                self.log.write(&format!("Moved {} to {}", file.display(), destination.display()));
                Ok(MoveRecord {
                    source: file.to_path_buf(),
                    destination: Some(destination),
                    outcome: MoveOutcome::Moved,
                    detail: track.title,
                })
            }
            Err(e) => Ok(self.failure(file, Some(destination), e)),
        }
    }

    fn failure(&self, file: &Path, destination: Option<PathBuf>, e: SortError) -> MoveRecord {
        error!("{}", e);
        self.log.write(&e.to_string());
        MoveRecord {
            source: file.to_path_buf(),
            destination,
            outcome: MoveOutcome::Failed,
            detail: e.to_string(),
        }
    }
}
