use super::*;

#[test]
fn english_common_labels() {
    assert_eq!(t(Language::En, "common.close"), "Close");
    assert_eq!(t(Language::En, "common.confirm"), "Confirm");
    assert_eq!(t(Language::En, "common.cancel"), "Cancel");
}

#[test]
fn arabic_common_labels() {
    assert_eq!(t(Language::Ar, "common.close"), "إغلاق");
    assert_eq!(t(Language::Ar, "common.confirm"), "تأكيد");
    assert_eq!(t(Language::Ar, "common.cancel"), "إلغاء");
}

#[test]
fn unknown_key_falls_back_to_key() {
    assert_eq!(t(Language::En, "dashboard.title"), "dashboard.title");
    assert_eq!(t(Language::Ar, "dashboard.title"), "dashboard.title");
}
