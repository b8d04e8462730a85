//! Utility helpers shared across controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from the state models
//! and controllers to improve reuse and testability.

#[cfg(feature = "csr")]
pub mod dom;
pub mod tasks;
pub mod theme_storage;
