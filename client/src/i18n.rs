//! Translation table for dialog chrome.
//!
//! Only the strings the dialogs render themselves live here; page copy is
//! supplied by callers already translated.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use crate::state::language::Language;

/// Look up `key` for `lang`, falling back to the key itself.
#[must_use]
pub fn t(lang: Language, key: &str) -> &str {
    match (lang, key) {
        (Language::En, "common.close") => "Close",
        (Language::Ar, "common.close") => "إغلاق",
        (Language::En, "common.confirm") => "Confirm",
        (Language::Ar, "common.confirm") => "تأكيد",
        (Language::En, "common.cancel") => "Cancel",
        (Language::Ar, "common.cancel") => "إلغاء",
        _ => key,
    }
}
