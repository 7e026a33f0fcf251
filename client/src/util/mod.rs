//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (document style,
//! `localStorage`) from component logic to improve reuse and testability.

pub mod auto_close;
pub mod language;
pub mod scroll_lock;
