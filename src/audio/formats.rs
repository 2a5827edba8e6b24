use std::path::Path;
use regex::RegexSet;
use crate::Result;

/// File name patterns of known audio formats.
/// https://en.wikipedia.org/wiki/Audio_file_format
pub const MEDIA_FORMATS: &[&str] = &[
    "*.3gp", "*.aa", "*.aac", "*.aax", "*.act", "*.aiff", "*.amr", "*.ape",
    "*.au", "*.awb", "*.dct", "*.dss", "*.dvf", "*.flac", "*.gsm", "*.iklax",
    "*.ivs", "*.m4a", "*.m4b", "*.m4p", "*.mmf", "*.mp3", "*.mpc", "*.msv",
    "*.ogg", "*.oga", "*.mogg", "*.opus", "*.ra", "*.rm", "*.raw", "*.sln",
    "*.tta", "*.vox", "*.wav", "*.wma", "*.wv", "*.webm", "*.8svx",
];

/// Case-insensitive matcher over `*`/`?` file name patterns.
#[derive(Debug, Clone)]
pub struct FormatMatcher {
    patterns: Vec<String>,
    set: RegexSet,
}

impl FormatMatcher {
    /// The built-in formats plus `custom` patterns.
    pub fn new(custom: &[String]) -> Result<Self> {
        let patterns: Vec<String> = MEDIA_FORMATS
            .iter()
            .map(|p| p.to_string())
            .chain(custom.iter().cloned())
            .collect();
        Self::from_patterns(patterns)
    }

    pub fn from_patterns(patterns: Vec<String>) -> Result<Self> {
        let set = RegexSet::new(patterns.iter().map(|p| glob_to_regex(p)))?;
        Ok(Self { patterns, set })
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn matches(&self, path: impl AsRef<Path>) -> bool {
        path.as_ref()
            .file_name()
            .map(|name| self.set.is_match(&name.to_string_lossy()))
            .unwrap_or(false)
    }
}

fn glob_to_regex(pattern: &str) -> String {
    let mut re = String::from("(?i)^");
    for c in pattern.chars() {
        match c {
            '*' => re.push_str(".*"),
            '?' => re.push('.'),
            c => re.push_str(&regex::escape(&c.to_string())),
        }
    }
    re.push('$');
    re
}
