//! Alert dialog state and the `use_alert` hook.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call the handle's `show_*` helpers; `AlertDialog` renders whatever
//! the state currently holds. There is no queue: showing while already open
//! replaces the payload.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Visual treatment of an alert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl AlertSeverity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Parse a severity name, treating anything unrecognized as `Info`.
    #[must_use]
    pub fn parse_lossy(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            _ => Self::Info,
        }
    }
}

impl From<&str> for AlertSeverity {
    fn from(raw: &str) -> Self {
        Self::parse_lossy(raw)
    }
}

/// Icon glyph and modifier class for one severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeverityDisplay {
    pub icon: &'static str,
    pub class: &'static str,
}

#[must_use]
pub fn severity_display(severity: AlertSeverity) -> SeverityDisplay {
    match severity {
        AlertSeverity::Success => SeverityDisplay {
            icon: "✓",
            class: "dialog__badge--success",
        },
        AlertSeverity::Error => SeverityDisplay {
            icon: "✕",
            class: "dialog__badge--error",
        },
        AlertSeverity::Warning => SeverityDisplay {
            icon: "⚠",
            class: "dialog__badge--warning",
        },
        AlertSeverity::Info => SeverityDisplay {
            icon: "ℹ",
            class: "dialog__badge--info",
        },
    }
}

/// Current alert payload.
///
/// `hide` only clears `is_open`; the last title, message and severity stay
/// readable while the dialog animates out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertState {
    pub is_open: bool,
    pub title: String,
    pub message: String,
    pub severity: AlertSeverity,
}

impl AlertState {
    pub fn show(&mut self, title: impl Into<String>, message: impl Into<String>, severity: AlertSeverity) {
        *self = Self {
            is_open: true,
            title: title.into(),
            message: message.into(),
            severity,
        };
    }

    pub fn hide(&mut self) {
        self.is_open = false;
    }

    pub fn show_success(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.show(title, message, AlertSeverity::Success);
    }

    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.show(title, message, AlertSeverity::Error);
    }

    pub fn show_warning(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.show(title, message, AlertSeverity::Warning);
    }

    pub fn show_info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.show(title, message, AlertSeverity::Info);
    }
}

/// Reactive handle returned by [`use_alert`].
#[derive(Clone, Copy, Debug)]
pub struct AlertHandle {
    pub state: RwSignal<AlertState>,
}

impl AlertHandle {
    pub fn show(self, title: impl Into<String>, message: impl Into<String>, severity: AlertSeverity) {
        let (title, message) = (title.into(), message.into());
        log::debug!("alert shown: severity={} title={title:?}", severity.as_str());
        self.state.update(|s| s.show(title, message, severity));
    }

    pub fn hide(self) {
        self.state.update(AlertState::hide);
    }

    pub fn show_success(self, title: impl Into<String>, message: impl Into<String>) {
        self.show(title, message, AlertSeverity::Success);
    }

    pub fn show_error(self, title: impl Into<String>, message: impl Into<String>) {
        self.show(title, message, AlertSeverity::Error);
    }

    pub fn show_warning(self, title: impl Into<String>, message: impl Into<String>) {
        self.show(title, message, AlertSeverity::Warning);
    }

    pub fn show_info(self, title: impl Into<String>, message: impl Into<String>) {
        self.show(title, message, AlertSeverity::Info);
    }

    /// Reactive read of the visibility flag.
    pub fn is_open(self) -> bool {
        self.state.with(|s| s.is_open)
    }
}

/// Create alert state owned by the calling component.
pub fn use_alert() -> AlertHandle {
    AlertHandle {
        state: RwSignal::new(AlertState::default()),
    }
}
