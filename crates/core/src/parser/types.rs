//! Types for the filename parser.

/// File extensions accepted by the parser, without the leading dot.
///
/// Matching is case-sensitive: `.MKV` is not a recognized extension.
pub const VIDEO_EXTENSIONS: &[&str] = &["mkv", "avi", "mp4"];

/// The capture set extracted from a release filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    /// Human-readable title segment, trimmed of separator whitespace.
    pub show_name: String,
    /// Season digits as they appeared in the filename (e.g. "02"), if any.
    pub season: Option<String>,
    /// Episode digits as they appeared in the filename. No padding is added.
    pub episode: String,
    /// Extension including the leading dot (e.g. ".mkv").
    pub extension: String,
}

/// Whether a filename ends in one of the recognized video extensions.
pub fn has_video_extension(filename: &str) -> bool {
    VIDEO_EXTENSIONS
        .iter()
        .any(|ext| filename.len() > ext.len() + 1 && filename.ends_with(&format!(".{ext}")))
}

/// Alternation fragment for embedding the recognized extensions in a pattern.
pub(super) fn extension_alternation() -> String {
    VIDEO_EXTENSIONS.join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_video_extension() {
        assert!(has_video_extension("show.mkv"));
        assert!(has_video_extension("show.avi"));
        assert!(has_video_extension("show.mp4"));
        assert!(!has_video_extension("show.txt"));
        assert!(!has_video_extension("show.mkv.part"));
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        assert!(!has_video_extension("show.MKV"));
        assert!(!has_video_extension("show.Mp4"));
    }

    #[test]
    fn test_bare_extension_is_not_a_filename() {
        assert!(!has_video_extension(".mkv"));
    }
}
