//! Display-name derivation from candidate paths.

/// Final path segment of a candidate path, filename, or absolute URL.
///
/// Returns `None` for empty input or a path with no usable segment.
pub fn display_name(candidate: &str) -> Option<String> {
    let segment = candidate
        .trim()
        .split('/')
        .filter(|s| !s.is_empty())
        .last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

/// Sanitizes a display name for use as a suggested save-name.
///
/// Path separators, NUL, and control characters become `_`; leading and
/// trailing dots and spaces are trimmed. Returns `None` when nothing usable
/// remains.
pub fn safe_save_name(name: &str) -> Option<String> {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c == '\0' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();
    let trimmed = cleaned.trim_matches(|c: char| c == '.' || c == ' ');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
