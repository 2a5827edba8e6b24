/// Characters the host filesystem refuses inside a single path segment.
#[cfg(windows)]
const FORBIDDEN: &[char] = &['"', '<', '>', '|', ':', '*', '?', '\\', '/'];

#[cfg(not(windows))]
const FORBIDDEN: &[char] = &['/'];

/// Whether `c` may not appear in a directory name on this platform.
pub fn is_forbidden(c: char) -> bool {
    c.is_control() || c == std::path::MAIN_SEPARATOR || FORBIDDEN.contains(&c)
}

/// Replace every forbidden character of `raw` with `_`. A name that is
/// exactly `.` or `..` becomes `_`.
///
/// ```
/// use audio_file_sorter::sanitize_dir_name;
///
/// assert_eq!(sanitize_dir_name("AC/DC"), "AC_DC");
/// ```
pub fn sanitize_dir_name(raw: &str) -> String {
    if raw == "." || raw == ".." {
        return "_".to_string();
    }
    raw.chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect()
}
