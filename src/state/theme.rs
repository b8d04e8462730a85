//! Light/dark theme state.
//!
//! The theme lives as a `data-theme` attribute on the document root. The
//! persisted variant restores the stored choice on load and writes every
//! toggle back; the always-dark variant ignores storage entirely.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::Deserialize;

/// Color theme applied to the document root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Value written to the `data-theme` attribute.
    #[must_use]
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a stored/attribute value. Anything unrecognized is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// How the initial theme is chosen and whether toggles persist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeVariant {
    /// Restore from storage (default dark) and persist each toggle.
    #[default]
    Persisted,
    /// Always start dark; never read or write storage.
    AlwaysDark,
}

impl ThemeVariant {
    #[must_use]
    pub fn persists(self) -> bool {
        matches!(self, Self::Persisted)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
    pub variant: ThemeVariant,
}

impl ThemeState {
    /// Initial state for a page load. `stored` is the raw storage value, if any.
    #[must_use]
    pub fn initial(variant: ThemeVariant, stored: Option<&str>) -> Self {
        let theme = match variant {
            ThemeVariant::Persisted => stored.and_then(Theme::parse).unwrap_or_default(),
            ThemeVariant::AlwaysDark => Theme::Dark,
        };
        Self { theme, variant }
    }

    /// Flip the theme. Returns the value to persist, if this variant persists.
    pub fn toggle(&mut self) -> Option<Theme> {
        self.theme = self.theme.toggled();
        self.variant.persists().then_some(self.theme)
    }
}
