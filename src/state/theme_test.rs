use super::*;

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
    assert!(!Theme::default().is_dark());
}

#[test]
fn theme_toggled_swaps_variant() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn theme_flag_matches_variant() {
    assert_eq!(Theme::Dark.flag(), ThemeFlag::Active);
    assert_eq!(Theme::Light.flag(), ThemeFlag::Inactive);
}

#[test]
fn from_stored_active_is_active() {
    assert_eq!(ThemeFlag::from_stored(Some("active")), ThemeFlag::Active);
}

#[test]
fn from_stored_absent_is_inactive() {
    assert_eq!(ThemeFlag::from_stored(None), ThemeFlag::Inactive);
}

#[test]
fn from_stored_legacy_null_string_is_inactive() {
    assert_eq!(ThemeFlag::from_stored(Some("null")), ThemeFlag::Inactive);
}

#[test]
fn from_stored_is_exact_match() {
    assert_eq!(ThemeFlag::from_stored(Some("")), ThemeFlag::Inactive);
    assert_eq!(ThemeFlag::from_stored(Some("Active")), ThemeFlag::Inactive);
    assert_eq!(ThemeFlag::from_stored(Some(" active")), ThemeFlag::Inactive);
    assert_eq!(ThemeFlag::from_stored(Some("true")), ThemeFlag::Inactive);
}

#[test]
fn flag_selects_theme() {
    assert_eq!(ThemeFlag::Active.theme(), Theme::Dark);
    assert_eq!(ThemeFlag::Inactive.theme(), Theme::Light);
    assert!(ThemeFlag::Active.is_active());
    assert!(!ThemeFlag::Inactive.is_active());
}
