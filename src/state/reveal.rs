//! Reveal-on-scroll decisions.
//!
//! Elements start hidden and are revealed when they intersect the viewport.
//! The one-shot variant reveals once and stops watching; the bidirectional
//! variant flips `in`/`out` marker classes every time visibility changes.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealVariant {
    #[default]
    OneShot,
    Bidirectional,
}

/// What to do with an element after an intersection change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    /// Apply the shown style and stop observing the element.
    ShowOnce,
    /// Mark the element `in`.
    MarkIn,
    /// Mark the element `out`.
    MarkOut,
    /// Leave the element alone.
    Ignore,
}

#[must_use]
pub fn reveal_action(variant: RevealVariant, intersecting: bool) -> RevealAction {
    match (variant, intersecting) {
        (RevealVariant::OneShot, true) => RevealAction::ShowOnce,
        (RevealVariant::OneShot, false) => RevealAction::Ignore,
        (RevealVariant::Bidirectional, true) => RevealAction::MarkIn,
        (RevealVariant::Bidirectional, false) => RevealAction::MarkOut,
    }
}

/// A set of elements revealed together, optionally staggered by index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealGroup {
    pub selector: &'static str,
    /// Extra transition delay per item, in seconds.
    pub stagger_step_s: Option<f64>,
}

pub const REVEAL_GROUPS: &[RevealGroup] = &[
    RevealGroup { selector: ".expertise-item", stagger_step_s: Some(0.1) },
    RevealGroup { selector: ".portfolio-item", stagger_step_s: None },
    RevealGroup { selector: ".timeline-item", stagger_step_s: Some(0.15) },
];

/// CSS `transition-delay` for the item at `index`, or `None` when unstaggered.
#[must_use]
pub fn stagger_delay(index: usize, step_s: Option<f64>) -> Option<String> {
    let step = step_s?;
    #[allow(clippy::cast_precision_loss)]
    let delay = index as f64 * step;
    Some(format!("{}s", (delay * 100.0).round() / 100.0))
}
