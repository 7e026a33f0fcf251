//! Language preference persistence and document attributes.
//!
//! Reads the stored preference from `localStorage`, falling back to the
//! browser locale, and mirrors the active language onto the `<html>` element
//! (`lang` and `dir`). Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths return the
//! default and no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

use crate::state::language::Language;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "app_language";

/// Read the language preference.
///
/// Stored choice first, then the browser's `navigator.language`, then the
/// default.
pub fn read_preference() -> Language {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Language::default();
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                if let Some(lang) = Language::from_code(&val) {
                    return lang;
                }
            }
        }

        window
            .navigator()
            .language()
            .and_then(|raw| Language::from_code(&raw))
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Language::default()
    }
}

/// Apply `lang` and `dir` attributes on the `<html>` element.
pub fn apply(lang: Language) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("lang", lang.code());
                let _ = el.set_attribute("dir", lang.dir());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = lang;
    }
}

/// Switch to `next`, apply it to the document, and persist it.
pub fn select(next: Language) -> Language {
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, next.code());
            }
        }
    }
    log::debug!("language selected: {}", next.code());
    next
}
