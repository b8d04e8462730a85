use super::*;

#[test]
fn default_theme_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
    assert_eq!(ThemeState::default().theme, Theme::Dark);
}

#[test]
fn attr_values_round_trip_through_parse() {
    assert_eq!(Theme::parse(Theme::Dark.as_attr()), Some(Theme::Dark));
    assert_eq!(Theme::parse(Theme::Light.as_attr()), Some(Theme::Light));
}

#[test]
fn parse_rejects_unknown_values() {
    assert_eq!(Theme::parse("sepia"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn toggling_twice_restores_original() {
    let mut state = ThemeState::initial(ThemeVariant::Persisted, Some("light"));
    state.toggle();
    assert_eq!(state.theme, Theme::Dark);
    state.toggle();
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn persisted_variant_restores_stored_choice() {
    let state = ThemeState::initial(ThemeVariant::Persisted, Some("light"));
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn persisted_variant_without_preference_defaults_dark() {
    assert_eq!(ThemeState::initial(ThemeVariant::Persisted, None).theme, Theme::Dark);
    assert_eq!(ThemeState::initial(ThemeVariant::Persisted, Some("garbage")).theme, Theme::Dark);
}

#[test]
fn always_dark_variant_ignores_storage() {
    let state = ThemeState::initial(ThemeVariant::AlwaysDark, Some("light"));
    assert_eq!(state.theme, Theme::Dark);
}

#[test]
fn toggle_reports_value_to_persist_only_for_persisted_variant() {
    let mut persisted = ThemeState::initial(ThemeVariant::Persisted, None);
    assert_eq!(persisted.toggle(), Some(Theme::Light));

    let mut always_dark = ThemeState::initial(ThemeVariant::AlwaysDark, None);
    assert_eq!(always_dark.toggle(), None);
    assert_eq!(always_dark.theme, Theme::Light);
}
