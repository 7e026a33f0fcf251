//! Interface language preference shared through context.

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Supported interface languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ar,
    #[default]
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Ar, Language::En];

    /// BCP 47 code stored in preferences and written to `<html lang>`.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
        }
    }

    /// Parse a stored code or a browser locale such as `ar-EG`.
    #[must_use]
    pub fn from_code(raw: &str) -> Option<Self> {
        let primary = raw.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "ar" => Some(Self::Ar),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Button label, written in the language itself.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Self::Ar => "العربية",
            Self::En => "English",
        }
    }

    /// Text direction for `<html dir>`.
    #[must_use]
    pub fn dir(self) -> &'static str {
        match self {
            Self::Ar => "rtl",
            Self::En => "ltr",
        }
    }
}

/// Read the language signal provided by `App`.
pub fn use_language() -> RwSignal<Language> {
    expect_context::<RwSignal<Language>>()
}
