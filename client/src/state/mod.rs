//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each dialog keeps its model in a plain struct (`alert`, `confirm`,
//! `dialog`) and exposes a small `Copy` handle over an `RwSignal` so
//! components can share it through props or context.

pub mod alert;
pub mod confirm;
pub mod dialog;
pub mod language;
