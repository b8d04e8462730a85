//! Transient UI state models.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `nav`, `scroll`, `modal`, ...) so each
//! controller depends on one small model with narrow update methods. Nothing
//! here touches the DOM; controllers project these values onto the page.

pub mod anchor;
pub mod counter;
pub mod hero;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod theme;
