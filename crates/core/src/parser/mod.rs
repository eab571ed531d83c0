//! Filename parser - extracts show name, season and episode from release
//! filenames.
//!
//! Release naming conventions vary wildly: arbitrary bracketed group tags,
//! inconsistent separators, optional season markers, trailing quality and
//! hash metadata. Parsing is a pure function over the input string: an
//! ordered list of regex strategies is tried in sequence, and a total
//! non-match of every strategy yields [`ParseError`].

mod error;
mod strategies;
mod types;

pub use error::ParseError;
pub use types::{has_video_extension, ParseResult, VIDEO_EXTENSIONS};

use tracing::debug;

use strategies::STRATEGIES;

/// Parse a release filename into its capture set.
///
/// Matching is all-or-nothing per strategy: either a strategy produces the
/// full capture set or the next one is tried. Episode and extension are
/// always present on success; season only when the filename encodes it.
pub fn parse(filename: &str) -> Result<ParseResult, ParseError> {
    if filename.is_empty() {
        return Err(ParseError::EmptyFilename);
    }

    for strategy in STRATEGIES {
        if let Some(result) = (strategy.apply)(filename) {
            debug!(strategy = strategy.name, filename, "filename matched");
            return Ok(result);
        }
    }

    Err(ParseError::NoMatch {
        filename: filename.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bracketed_release() {
        let result = parse("[Group]Show Name - 1 [1080p][ABCDEF12].mkv").unwrap();
        assert_eq!(result.show_name, "Show Name");
        assert_eq!(result.season, None);
        assert_eq!(result.episode, "1");
        assert_eq!(result.extension, ".mkv");
    }

    #[test]
    fn test_parse_season_episode_token() {
        let result = parse("[Group]Show Name - S02E05 [x264].mkv").unwrap();
        assert_eq!(result.show_name, "Show Name");
        assert_eq!(result.season.as_deref(), Some("02"));
        assert_eq!(result.episode, "05");
        assert_eq!(result.extension, ".mkv");
    }

    #[test]
    fn test_parse_episode_prefix_without_season() {
        let result = parse("[G]Show - E07 [720p].mkv").unwrap();
        assert_eq!(result.show_name, "Show");
        assert_eq!(result.season, None);
        assert_eq!(result.episode, "07");
    }

    #[test]
    fn test_parse_parenthesized_tag() {
        let result = parse("(Subs) Show Name - 3 (720p).avi").unwrap();
        assert_eq!(result.show_name, "Show Name");
        assert_eq!(result.episode, "3");
        assert_eq!(result.extension, ".avi");
    }

    #[test]
    fn test_parse_without_metadata() {
        let result = parse("Show Name - 12.mp4").unwrap();
        assert_eq!(result.show_name, "Show Name");
        assert_eq!(result.episode, "12");
        assert_eq!(result.extension, ".mp4");
    }

    #[test]
    fn test_parse_show_name_with_internal_hyphens() {
        // Internal hyphens belong to the show name as long as a
        // "<text> - <number>" structure closes the name.
        let result = parse("Blue - Exorcist - 5 [x].mkv").unwrap();
        assert_eq!(result.show_name, "Blue - Exorcist");
        assert_eq!(result.episode, "5");
    }

    #[test]
    fn test_parse_separator_whitespace_is_trimmed() {
        let result = parse("[G]  Show Name   -  3 [x].mkv").unwrap();
        assert_eq!(result.show_name, "Show Name");
        assert_eq!(result.episode, "3");
    }

    #[test]
    fn test_fallback_episode_with_trailing_description() {
        // The primary pattern cannot place the episode digits here; the
        // fallback picks up the bare number before the description.
        let result = parse("[G]Show - 5 - Some Title [720p].mkv").unwrap();
        assert_eq!(result.show_name, "Show");
        assert_eq!(result.season, None);
        assert_eq!(result.episode, "5");
        assert_eq!(result.extension, ".mkv");
    }

    #[test]
    fn test_parse_rejects_unrecognized_extension() {
        let err = parse("[Group]Show Name - 1 [1080p].txt").unwrap_err();
        assert!(matches!(err, ParseError::NoMatch { .. }));
    }

    #[test]
    fn test_parse_rejects_uppercase_extension() {
        let err = parse("Show Name - 1.MKV").unwrap_err();
        assert!(matches!(err, ParseError::NoMatch { .. }));
    }

    #[test]
    fn test_parse_rejects_name_without_episode_number() {
        let err = parse("Show Name.mkv").unwrap_err();
        assert!(matches!(err, ParseError::NoMatch { .. }));
    }

    #[test]
    fn test_parse_empty_filename() {
        let err = parse("").unwrap_err();
        assert!(matches!(err, ParseError::EmptyFilename));
    }
}
