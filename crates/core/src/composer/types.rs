//! Types for the name composer.

/// Per-batch overrides applied when composing normalized names.
///
/// Empty or whitespace-only values are treated as "not provided" rather
/// than as errors.
#[derive(Debug, Clone, Default)]
pub struct RenameSpec {
    /// Replacement show name, e.g. a localized title.
    pub new_show_name: Option<String>,
    /// Season to use when the filename does not encode one. Typically
    /// derived from an enclosing "Season N" directory label.
    pub season_override: Option<String>,
}

impl RenameSpec {
    /// Sets the replacement show name.
    pub fn with_show_name(mut self, name: impl Into<String>) -> Self {
        self.new_show_name = Some(name.into());
        self
    }

    /// Sets the season override.
    pub fn with_season_override(mut self, season: impl Into<String>) -> Self {
        self.season_override = Some(season.into());
        self
    }
}
