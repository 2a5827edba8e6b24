use std::path::{Path, PathBuf};
use log::{debug, warn};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::{MetadataOptions, MetadataRevision, StandardTagKey};
use symphonia::core::probe::Hint;
use crate::audio::formats::FormatMatcher;
use crate::{Result, SortError, TrackMetadata};
use rayon::prelude::*;

/// Tag values as read from a file, before they are checked for completeness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTags {
    pub album_artist: Option<String>,
    pub artists: Vec<String>,
    pub album: Option<String>,
    pub title: Option<String>,
}

impl RawTags {
    /// The album artist, or the first track artist when there is none.
    pub fn primary_artist(&self) -> Option<&str> {
        self.album_artist
            .as_deref()
            .or_else(|| self.artists.first().map(String::as_str))
    }

    /// Reduce to the fields needed for sorting, or report which are missing.
    pub fn into_track(self, path: &Path) -> Result<TrackMetadata> {
        if self.album_artist.is_none() && self.artists.len() > 1 {
            debug!(
                "{} lists {} artists, using {:?}",
                path.display(),
                self.artists.len(),
                self.artists[0]
            );
        }

        let primary_artist = self.primary_artist().map(str::to_string);
        let mut missing = Vec::new();
        if primary_artist.is_none() {
            missing.push("artist");
        }
        if self.album.is_none() {
            missing.push("album");
        }
        if self.title.is_none() {
            missing.push("title");
        }

        match (primary_artist, self.album, self.title) {
            (Some(primary_artist), Some(album), Some(title)) => Ok(TrackMetadata {
                primary_artist,
                album,
                title,
            }),
            _ => Err(SortError::MetadataIncomplete {
                path: path.to_path_buf(),
                missing: missing.join(", "),
            }),
        }
    }

    fn absorb(&mut self, revision: &MetadataRevision) {
        for tag in revision.tags() {
            let value = tag.value.to_string();
            match tag.std_key {
                Some(StandardTagKey::AlbumArtist) if self.album_artist.is_none() => {
                    self.album_artist = Some(value);
                }
                Some(StandardTagKey::Artist) if !self.artists.contains(&value) => {
                    self.artists.push(value);
                }
                Some(StandardTagKey::Album) if self.album.is_none() => {
                    self.album = Some(value);
                }
                Some(StandardTagKey::TrackTitle) if self.title.is_none() => {
                    self.title = Some(value);
                }
                _ => {}
            }
        }
    }
}

/// Reads the tags of one audio file.
pub trait MetadataSource: Sync {
    fn read_tags(&self, path: &Path) -> Result<RawTags>;
}

pub struct MetadataExtractor;

impl MetadataSource for MetadataExtractor {
    fn read_tags(&self, path: &Path) -> Result<RawTags> {
        Self::extract_tags(path)
    }
}

impl MetadataExtractor {
    pub fn extract_tags(path: impl AsRef<Path>) -> Result<RawTags> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;

        // Create media source stream
        let mss = MediaSourceStream::new(Box::new(file), Default::default());

        let mut hint = Hint::new();
        if let Some(extension) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(extension);
        }

        let mut probed = symphonia::default::get_probe()
            .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
            .map_err(|e| SortError::Metadata(e.to_string()))?;

        let mut tags = RawTags::default();

        // ID3v2 and similar leading tags show up during probing,
        // container tags (Vorbis comments, MP4 atoms) on the format reader.
        if let Some(metadata) = probed.metadata.get() {
            if let Some(revision) = metadata.current() {
                tags.absorb(revision);
            }
        }
        if let Some(revision) = probed.format.metadata().current() {
            tags.absorb(revision);
        }

        Ok(tags)
    }

    /// Every file below `dir` whose name matches one of the format patterns,
    /// sorted by path.
    pub fn collect_audio_files(dir: impl AsRef<Path>, formats: &FormatMatcher) -> Vec<PathBuf> {
        let entries: Vec<walkdir::DirEntry> = walkdir::WalkDir::new(dir.as_ref())
            .follow_links(true)
            .into_iter()
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!("Error accessing entry: {}", err);
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .collect();

        let mut files: Vec<PathBuf> = entries
            .par_iter()
            .filter(|e| formats.matches(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();
        files.sort();
        files
    }
}
