use std::path::{Path, PathBuf};
use log::{debug, info, warn};
use crate::sorting::distance::damerau_levenshtein;
use crate::utils::file_ops::FileManager;
use crate::{Result, SortError};

/// Existing directory under the parent of a desired folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFolder {
    pub path: PathBuf,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionDecision {
    UseExisting(PathBuf),
    CreateNew(PathBuf),
}

impl ResolutionDecision {
    pub fn path(&self) -> &Path {
        match self {
            ResolutionDecision::UseExisting(path) | ResolutionDecision::CreateNew(path) => path,
        }
    }

    pub fn into_path(self) -> PathBuf {
        match self {
            ResolutionDecision::UseExisting(path) | ResolutionDecision::CreateNew(path) => path,
        }
    }
}

/// Picks between near-duplicate folders.
///
/// `candidates` is shown 1-indexed. The return value is `0` to create the
/// desired folder anyway, or `1..=candidates.len()` to reuse a candidate.
/// Implementations may block for as long as they need (e.g. waiting on a
/// human); anything outside that range is rejected and asked again.
pub trait CandidateSelector {
    fn select_candidate(&mut self, desired_name: &str, candidates: &[CandidateFolder]) -> usize;
}

pub struct FolderResolver {
    threshold: usize,
    files: FileManager,
}

impl FolderResolver {
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            files: FileManager::new(),
        }
    }

    /// Children whose name is within the threshold of `desired_name`, in the
    /// order they were given.
    pub fn near_matches(&self, desired_name: &str, children: &[CandidateFolder]) -> Vec<CandidateFolder> {
        children
            .iter()
            .filter(|child| damerau_levenshtein(desired_name, &child.name) <= self.threshold)
            .cloned()
            .collect()
    }

    /// Decide for `desired` given a snapshot of its parent's child folders.
    ///
    /// Touches no filesystem state; the selector is consulted only when there
    /// is no exact match and at least one near match.
    pub fn decide(
        &self,
        desired: &Path,
        children: &[CandidateFolder],
        selector: &mut dyn CandidateSelector,
    ) -> ResolutionDecision {
        let desired_name = desired
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if children.iter().any(|child| child.name == desired_name) {
            return ResolutionDecision::UseExisting(desired.to_path_buf());
        }

        let candidates = self.near_matches(&desired_name, children);
        if candidates.is_empty() {
            return ResolutionDecision::CreateNew(desired.to_path_buf());
        }

        debug!("{} similar folders found for {}", candidates.len(), desired_name);
        loop {
            let selection = selector.select_candidate(&desired_name, &candidates);
            match selection {
                0 => return ResolutionDecision::CreateNew(desired.to_path_buf()),
                n if n <= candidates.len() => {
                    return ResolutionDecision::UseExisting(candidates[n - 1].path.clone());
                }
                n => warn!(
                    "Selection {} out of range 0..={} for {}, asking again",
                    n,
                    candidates.len(),
                    desired_name
                ),
            }
        }
    }

    /// Make sure the directory chosen by `decision` exists and return it.
    pub fn apply(&self, decision: &ResolutionDecision) -> Result<PathBuf> {
        if let ResolutionDecision::CreateNew(path) = decision {
            info!("Creating folder {}", path.display());
        }
        self.files.ensure_directory(decision.path())?;
        Ok(decision.path().to_path_buf())
    }

    /// Resolve `desired` against the live contents of its parent directory.
    ///
    /// The parent must already exist; a missing parent is a
    /// [`SortError::PreconditionViolation`].
    pub fn resolve(&self, desired: &Path, selector: &mut dyn CandidateSelector) -> Result<ResolutionDecision> {
        if self.files.is_dir(desired) {
            return Ok(ResolutionDecision::UseExisting(desired.to_path_buf()));
        }

        let parent = desired
            .parent()
            .filter(|parent| desired.file_name().is_some() && self.files.is_dir(parent))
            .ok_or_else(|| SortError::PreconditionViolation(desired.to_path_buf()))?;

        let children: Vec<CandidateFolder> = self
            .files
            .child_dirs(parent)?
            .into_iter()
            .map(|(path, name)| CandidateFolder { path, name })
            .collect();

        let decision = self.decide(desired, &children, selector);
        self.apply(&decision)?;
        Ok(decision)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    /// Replays a fixed list of answers, repeating the last one.
    pub(crate) struct Scripted {
        answers: Vec<usize>,
        pub calls: Vec<Vec<String>>,
    }

    impl Scripted {
        pub(crate) fn new(answers: &[usize]) -> Self {
            Self {
                answers: answers.to_vec(),
                calls: Vec::new(),
            }
        }
    }

    impl CandidateSelector for Scripted {
        fn select_candidate(&mut self, _desired_name: &str, candidates: &[CandidateFolder]) -> usize {
            let idx = self.calls.len().min(self.answers.len() - 1);
            self.calls.push(candidates.iter().map(|c| c.name.clone()).collect());
            self.answers[idx]
        }
    }

    fn folder(parent: &Path, name: &str) -> CandidateFolder {
        CandidateFolder {
            path: parent.join(name),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_empty_parent_creates_new() {
        let tmp = tempdir().unwrap();
        let desired = tmp.path().join("Beatles");
        let mut selector = Scripted::new(&[1]);

        let decision = FolderResolver::new(3).resolve(&desired, &mut selector).unwrap();

        assert_eq!(decision, ResolutionDecision::CreateNew(desired.clone()));
        assert!(desired.is_dir());
        assert!(selector.calls.is_empty());
    }

    #[test]
    fn test_selecting_near_match_reuses_it() {
        let tmp = tempdir().unwrap();
        fs::create_dir(tmp.path().join("Beattles")).unwrap();
        let desired = tmp.path().join("Beatles");
        let mut selector = Scripted::new(&[1]);

        let decision = FolderResolver::new(3).resolve(&desired, &mut selector).unwrap();

        assert_eq!(decision, ResolutionDecision::UseExisting(tmp.path().join("Beattles")));
        assert!(!desired.exists());
        assert_eq!(selector.calls, vec![vec!["Beattles".to_string()]]);
    }

    #[test]
    fn test_selecting_zero_creates_alongside() {
        let tmp = tempdir().unwrap();
        fs::create_dir(tmp.path().join("Beattles")).unwrap();
        let desired = tmp.path().join("Beatles");
        let mut selector = Scripted::new(&[0]);

        let decision = FolderResolver::new(3).resolve(&desired, &mut selector).unwrap();

        assert_eq!(decision, ResolutionDecision::CreateNew(desired.clone()));
        assert!(desired.is_dir());
        assert!(tmp.path().join("Beattles").is_dir());
    }

    #[test]
    fn test_exact_match_skips_selector() {
        let tmp = tempdir().unwrap();
        fs::create_dir(tmp.path().join("Beatles")).unwrap();
        fs::create_dir(tmp.path().join("Beattles")).unwrap();
        let desired = tmp.path().join("Beatles");
        let mut selector = Scripted::new(&[1]);

        let decision = FolderResolver::new(3).resolve(&desired, &mut selector).unwrap();

        assert_eq!(decision, ResolutionDecision::UseExisting(desired));
        assert!(selector.calls.is_empty());
    }

    #[test]
    fn test_distant_folders_are_not_candidates() {
        let tmp = tempdir().unwrap();
        fs::create_dir(tmp.path().join("Metallica")).unwrap();
        let desired = tmp.path().join("Beatles");
        let mut selector = Scripted::new(&[1]);

        let decision = FolderResolver::new(3).resolve(&desired, &mut selector).unwrap();

        assert_eq!(decision, ResolutionDecision::CreateNew(desired));
        assert!(selector.calls.is_empty());
    }

    #[test]
    fn test_files_are_not_candidates() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("Beattles"), b"not a folder").unwrap();
        let desired = tmp.path().join("Beatles");
        let mut selector = Scripted::new(&[1]);

        let decision = FolderResolver::new(3).resolve(&desired, &mut selector).unwrap();

        assert_eq!(decision, ResolutionDecision::CreateNew(desired));
        assert!(selector.calls.is_empty());
    }

    #[test]
    fn test_out_of_range_selection_is_asked_again() {
        let parent = Path::new("/music/B");
        let children = vec![folder(parent, "Beattles"), folder(parent, "Beatle")];
        let mut selector = Scripted::new(&[7, 3, 2]);

        let decision = FolderResolver::new(3).decide(&parent.join("Beatles"), &children, &mut selector);

        assert_eq!(decision, ResolutionDecision::UseExisting(parent.join("Beatle")));
        assert_eq!(selector.calls.len(), 3);
    }

    #[test]
    fn test_candidates_keep_listing_order() {
        let parent = Path::new("/music/B");
        let children = vec![
            folder(parent, "Beatle"),
            folder(parent, "Metallica"),
            folder(parent, "Beat"),
            folder(parent, "Beattles"),
        ];

        let matches = FolderResolver::new(3).near_matches("Beatles", &children);
        let names: Vec<&str> = matches.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, vec!["Beatle", "Beat", "Beattles"]);
    }

    #[test]
    fn test_threshold_is_inclusive_and_tunable() {
        let parent = Path::new("/music/B");
        let children = vec![folder(parent, "Beat")];

        assert_eq!(FolderResolver::new(3).near_matches("Beatles", &children).len(), 1);
        assert!(FolderResolver::new(2).near_matches("Beatles", &children).is_empty());
        assert!(FolderResolver::new(0).near_matches("Beatles", &children).is_empty());
    }

    #[test]
    fn test_decide_does_not_touch_filesystem() {
        let tmp = tempdir().unwrap();
        let desired = tmp.path().join("Beatles");
        let mut selector = Scripted::new(&[0]);

        let decision = FolderResolver::new(3).decide(&desired, &[], &mut selector);

        assert_eq!(decision, ResolutionDecision::CreateNew(desired.clone()));
        assert!(!desired.exists());
    }

    #[test]
    fn test_missing_parent_is_precondition_violation() {
        let tmp = tempdir().unwrap();
        let desired = tmp.path().join("missing").join("Beatles");
        let mut selector = Scripted::new(&[0]);

        let err = FolderResolver::new(3).resolve(&desired, &mut selector).unwrap_err();

        assert!(matches!(err, SortError::PreconditionViolation(p) if p == desired));
    }
}
