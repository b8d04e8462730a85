//! Signal-to-DOM controllers, one per UI concern.
//!
//! DESIGN
//! ======
//! Event handlers only mutate state signals; `Effect`s project signal values
//! onto the page. Controllers never call each other. Where one concern
//! depends on another (navbar colors on the theme), the effect reads both
//! signals and re-runs when either changes.

pub mod hero;
pub mod modal;
pub mod nav;
pub mod scroll_effects;
pub mod smooth_scroll;
pub mod theme;
