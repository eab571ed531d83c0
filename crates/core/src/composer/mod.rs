//! Name composer - turns a parser capture set plus per-batch overrides
//! into the final normalized filename.
//!
//! Both forms attach the extension directly to the episode token:
//!
//! - with a season:    `"<show> - S<season>E<episode><ext>"`
//! - without a season: `"<show> - <episode><ext>"`
//!
//! Tokens pass through as captured or supplied; the composer never adds
//! zero-padding.

mod types;

pub use types::RenameSpec;

use crate::parser::ParseResult;

/// Compose the normalized filename for a parsed release name.
///
/// A non-empty `new_show_name` override replaces the parsed show name. For
/// the season token, a season encoded in the original filename is
/// authoritative and wins over any override; the override only fills the
/// gap when the filename carried no season. Without either, the composed
/// name degrades to the no-season form.
pub fn compose(result: &ParseResult, spec: &RenameSpec) -> String {
    let show_name = non_empty(spec.new_show_name.as_deref()).unwrap_or(&result.show_name);

    let season = result
        .season
        .as_deref()
        .or_else(|| non_empty(spec.season_override.as_deref()));

    let composed = match season {
        Some(season) => format!(
            "{} - S{}E{}{}",
            show_name, season, result.episode, result.extension
        ),
        None => format!("{} - {}{}", show_name, result.episode, result.extension),
    };

    collapse_whitespace(&composed)
}

/// Treats empty and whitespace-only override values as absent.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Collapses every run of whitespace into a single space.
///
/// Applied to the whole assembled string, not per field, so a missing show
/// name still leaves a single leading space rather than an error.
fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}
