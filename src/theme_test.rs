use super::*;

#[test]
fn toggle_is_involutive() {
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn stored_dark_parses_as_dark() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
}

#[test]
fn missing_or_garbled_value_defaults_to_light() {
    assert_eq!(Theme::from_stored(None), Theme::Light);
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("solarized")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("")), Theme::Light);
}

#[test]
fn stored_string_round_trips() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
    }
}

#[test]
fn body_classes_are_mutually_exclusive() {
    assert_ne!(Theme::Light.body_class(), Theme::Dark.body_class());
}

#[test]
fn icon_shows_the_opposite_mode() {
    assert!(Theme::Light.toggle_icon_html().contains("fa-moon"));
    assert!(Theme::Dark.toggle_icon_html().contains("fa-sun"));
}
