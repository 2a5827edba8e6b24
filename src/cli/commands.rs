use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use crate::audio::formats::FormatMatcher;
use crate::sorting::path_builder::{SortConfig, DEFAULT_THRESHOLD};

#[derive(Parser, Debug)]
#[command(name = "afs")]
#[command(version = "1.0")]
#[command(about = "Move all audio files in a given directory in a sorted way to the destination directory", long_about = None)]
pub struct Cli {
    /// The directory with the files to sort
    #[arg(short = 's', long = "source", value_name = "DIRECTORY")]
    pub source: PathBuf,

    /// The destination parent directory
    #[arg(short = 'd', long = "destination", value_name = "DIRECTORY")]
    pub destination: PathBuf,

    /// Output every move
    #[arg(short = 'o', long = "output")]
    pub output: bool,

    /// Custom format to sort, e.g. "*.mid" (repeatable)
    #[arg(short = 'f', long = "format", value_name = "FORMAT", action = clap::ArgAction::Append)]
    pub formats: Vec<String>,

    /// Highest edit distance at which an existing folder is offered for reuse
    #[arg(short = 't', long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: usize,

    /// File that moves and failures are appended to
    #[arg(long, value_name = "FILE", default_value = "log.txt")]
    pub log_file: PathBuf,

    /// Write a CSV report of the run to this file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,
}

impl Cli {
    /// Both directories must exist before anything is touched.
    pub fn validate(&self) -> Result<(), clap::Error> {
        for (flag, dir) in [("--source", &self.source), ("--destination", &self.destination)] {
            if !dir.is_dir() {
                return Err(Cli::command().error(
                    ErrorKind::ValueValidation,
                    format!("{} directory does not exist: {}", flag, dir.display()),
                ));
            }
        }
        Ok(())
    }

    /// Built-in formats plus every `-f` pattern; a pattern that fails to
    /// compile is reported like any other bad argument.
    pub fn format_matcher(&self) -> Result<FormatMatcher, clap::Error> {
        FormatMatcher::new(&self.formats).map_err(|e| {
            Cli::command().error(ErrorKind::ValueValidation, format!("invalid --format pattern: {}", e))
        })
    }

    pub fn sort_config(&self) -> SortConfig {
        SortConfig {
            threshold: self.threshold,
            ..SortConfig::default()
        }
    }
}
