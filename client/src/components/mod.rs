//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dialog chrome and page controls while reading/writing
//! state handed to them through props or Leptos context providers.

pub mod alert_dialog;
pub mod confirm_dialog;
pub mod language_toggle;
