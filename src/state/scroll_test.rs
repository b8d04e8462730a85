use super::*;

#[test]
fn scroll_state_starts_at_top() {
    assert_eq!(ScrollState::default().offset, 0.0);
}

#[test]
fn set_offset_reports_change_and_clamps_overscroll() {
    let mut state = ScrollState::default();
    assert!(state.set_offset(120.0));
    assert!(!state.set_offset(120.0));
    assert!(state.set_offset(-30.0));
    assert_eq!(state.offset, 0.0);
}

#[test]
fn navbar_is_light_and_flat_near_top() {
    let style = navbar_style(50.0, Theme::Dark, 50.0);
    assert_eq!(style.background, "rgba(10, 10, 10, 0.8)");
    assert_eq!(style.box_shadow, "none");
}

#[test]
fn navbar_is_tinted_with_shadow_past_threshold() {
    let style = navbar_style(51.0, Theme::Dark, 50.0);
    assert_eq!(style.background, "rgba(10, 10, 10, 0.95)");
    assert_ne!(style.box_shadow, "none");
}

#[test]
fn navbar_colors_follow_theme() {
    assert_ne!(navbar_style(200.0, Theme::Dark, 50.0), navbar_style(200.0, Theme::Light, 50.0));
    assert_ne!(navbar_style(0.0, Theme::Dark, 50.0), navbar_style(0.0, Theme::Light, 50.0));
}

#[test]
fn navbar_depends_only_on_threshold_side_and_theme() {
    for theme in [Theme::Dark, Theme::Light] {
        assert_eq!(navbar_style(0.0, theme, 50.0), navbar_style(49.0, theme, 50.0));
        assert_eq!(navbar_style(51.0, theme, 50.0), navbar_style(10_000.0, theme, 50.0));
    }
}

#[test]
fn scroll_top_control_appears_past_threshold() {
    assert!(!scroll_top_visible(0.0, 500.0));
    assert!(!scroll_top_visible(500.0, 500.0));
    assert!(scroll_top_visible(501.0, 500.0));
}
