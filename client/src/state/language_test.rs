use super::*;

#[test]
fn language_default_is_english() {
    assert_eq!(Language::default(), Language::En);
}

#[test]
fn code_round_trips_through_from_code() {
    for lang in Language::ALL {
        assert_eq!(Language::from_code(lang.code()), Some(lang));
    }
}

#[test]
fn from_code_accepts_browser_locales() {
    assert_eq!(Language::from_code("ar-EG"), Some(Language::Ar));
    assert_eq!(Language::from_code("en_US"), Some(Language::En));
    assert_eq!(Language::from_code(" EN "), Some(Language::En));
}

#[test]
fn from_code_rejects_unsupported() {
    assert_eq!(Language::from_code("fr"), None);
    assert_eq!(Language::from_code(""), None);
}

#[test]
fn arabic_is_right_to_left() {
    assert_eq!(Language::Ar.dir(), "rtl");
    assert_eq!(Language::En.dir(), "ltr");
}

#[test]
fn native_names_match_toggle_labels() {
    assert_eq!(Language::Ar.native_name(), "العربية");
    assert_eq!(Language::En.native_name(), "English");
}

#[test]
fn serde_uses_codes() {
    assert_eq!(serde_json::to_string(&Language::Ar).unwrap(), "\"ar\"");
    let back: Language = serde_json::from_str("\"en\"").unwrap();
    assert_eq!(back, Language::En);
}
