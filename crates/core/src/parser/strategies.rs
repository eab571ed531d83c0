//! Ordered parsing strategies for release filenames.
//!
//! Each strategy is a named total function over the input string: either it
//! produces a full capture set or it declines. No per-field fallback happens
//! between strategies.

use once_cell::sync::Lazy;
use regex_lite::Regex;

use super::types::{extension_alternation, ParseResult};

/// A named parsing strategy.
pub(super) struct Strategy {
    pub name: &'static str,
    pub apply: fn(&str) -> Option<ParseResult>,
}

/// Strategies in precedence order. The fallback runs only when the primary
/// fails to match at all.
pub(super) const STRATEGIES: &[Strategy] = &[
    Strategy {
        name: "primary",
        apply: primary,
    },
    Strategy {
        name: "fallback",
        apply: fallback,
    },
];

// Optional leading "[Group]" / "(Group)" tag, show name up to a hyphen
// separator, optional S<digits> season, optional E prefix, episode digits,
// discarded trailing bracketed metadata, extension.
static PRIMARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?:[\[(][^\])]*[\])])?\s*(?P<show>.+?)\s*-\s*(?:S(?P<season>\d+))?\s*E?(?P<episode>\d+)\s*(?:[\[(].*)?(?P<ext>\.(?:{}))$",
        extension_alternation()
    ))
    .expect("primary pattern compiles")
});

// Looser shape: bare episode number after the show name, then a
// hyphen-delimited description before metadata/extension. No season support.
static FALLBACK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?:[\[(][^\])]*[\])])?\s*(?P<show>.+?)\s*-\s*(?P<episode>\d+)\s*-\s*.*?(?P<ext>\.(?:{}))$",
        extension_alternation()
    ))
    .expect("fallback pattern compiles")
});

fn primary(filename: &str) -> Option<ParseResult> {
    let caps = PRIMARY.captures(filename)?;
    Some(ParseResult {
        show_name: caps.name("show")?.as_str().trim().to_string(),
        season: caps.name("season").map(|m| m.as_str().to_string()),
        episode: caps.name("episode")?.as_str().to_string(),
        extension: caps.name("ext")?.as_str().to_string(),
    })
}

fn fallback(filename: &str) -> Option<ParseResult> {
    let caps = FALLBACK.captures(filename)?;
    Some(ParseResult {
        show_name: caps.name("show")?.as_str().trim().to_string(),
        season: None,
        episode: caps.name("episode")?.as_str().to_string(),
        extension: caps.name("ext")?.as_str().to_string(),
    })
}
