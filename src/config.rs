//! Site behavior configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! A page may carry an inline `<script id="folio-config" type="application/json">`
//! blob to pick behavior variants and tune thresholds. Every field is optional;
//! missing fields fall back to [`SiteConfig::default`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::FolioError;
use crate::state::reveal::RevealVariant;
use crate::state::theme::ThemeVariant;

/// Tunable site behavior.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme_variant: ThemeVariant,
    pub reveal_variant: RevealVariant,
    /// Storage key for the persisted theme preference.
    pub storage_key: String,
    pub navbar_scroll_threshold_px: f64,
    pub scroll_top_threshold_px: f64,
    /// Look-ahead applied to section tops when picking the active nav link.
    pub active_section_offset_px: f64,
    /// Viewports at or below this width use the compact modal action slot.
    pub modal_breakpoint_px: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub stats_threshold: f64,
    pub typing: TypingConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_variant: ThemeVariant::Persisted,
            reveal_variant: RevealVariant::OneShot,
            storage_key: "theme".to_owned(),
            navbar_scroll_threshold_px: 50.0,
            scroll_top_threshold_px: 500.0,
            active_section_offset_px: 200.0,
            modal_breakpoint_px: 1024.0,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_owned(),
            stats_threshold: 0.5,
            typing: TypingConfig::default(),
        }
    }
}

/// Hero title typing effect.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub enabled: bool,
    pub start_delay_ms: u32,
    pub char_interval_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self { enabled: true, start_delay_ms: 800, char_interval_ms: 100 }
    }
}

impl SiteConfig {
    /// Parse a config blob. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Config`] when the blob is not valid JSON or a
    /// field has the wrong shape, and [`FolioError::InvalidSetting`] when an
    /// intersection-observer option is out of range.
    pub fn from_json(raw: &str) -> Result<Self, FolioError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the options handed to `IntersectionObserver`, which throws on
    /// thresholds outside `[0, 1]` and on malformed root margins.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::InvalidSetting`] naming the first bad field.
    pub fn validate(&self) -> Result<(), FolioError> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(FolioError::InvalidSetting { field: "reveal_threshold", reason: "must be within [0, 1]" });
        }
        if !(0.0..=1.0).contains(&self.stats_threshold) {
            return Err(FolioError::InvalidSetting { field: "stats_threshold", reason: "must be within [0, 1]" });
        }
        if !is_root_margin(&self.reveal_root_margin) {
            return Err(FolioError::InvalidSetting {
                field: "reveal_root_margin",
                reason: "must be 1 to 4 px or % lengths",
            });
        }
        Ok(())
    }
}

/// Whether `raw` is a CSS margin shorthand of 1 to 4 `px`/`%` lengths.
fn is_root_margin(raw: &str) -> bool {
    let parts: Vec<&str> = raw.split_whitespace().collect();
    (1..=4).contains(&parts.len())
        && parts.iter().all(|part| {
            part.strip_suffix("px")
                .or_else(|| part.strip_suffix('%'))
                .and_then(|number| number.parse::<f64>().ok())
                .is_some_and(f64::is_finite)
        })
}
