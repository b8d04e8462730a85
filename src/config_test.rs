use super::*;

#[test]
fn blank_blob_yields_defaults() {
    assert_eq!(SiteConfig::from_json("").ok(), Some(SiteConfig::default()));
    assert_eq!(SiteConfig::from_json("  \n").ok(), Some(SiteConfig::default()));
}

#[test]
fn defaults_match_page_behavior() {
    let config = SiteConfig::default();
    assert_eq!(config.theme_variant, ThemeVariant::Persisted);
    assert_eq!(config.reveal_variant, RevealVariant::OneShot);
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.navbar_scroll_threshold_px, 50.0);
    assert_eq!(config.scroll_top_threshold_px, 500.0);
    assert_eq!(config.active_section_offset_px, 200.0);
    assert_eq!(config.modal_breakpoint_px, 1024.0);
    assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
    assert_eq!(config.typing.start_delay_ms, 800);
    assert_eq!(config.typing.char_interval_ms, 100);
}

#[test]
fn partial_blob_overrides_only_named_fields() {
    let config = SiteConfig::from_json(
        r#"{ "theme_variant": "always_dark", "reveal_variant": "bidirectional", "typing": { "enabled": false } }"#,
    )
    .expect("config should parse");
    assert_eq!(config.theme_variant, ThemeVariant::AlwaysDark);
    assert_eq!(config.reveal_variant, RevealVariant::Bidirectional);
    assert!(!config.typing.enabled);
    assert_eq!(config.typing.start_delay_ms, 800);
    assert_eq!(config.storage_key, "theme");
}

#[test]
fn malformed_blob_is_config_error() {
    let err = SiteConfig::from_json("{ not json").expect_err("should fail");
    assert!(matches!(err, FolioError::Config(_)));
}

#[test]
fn wrong_field_shape_is_config_error() {
    let err = SiteConfig::from_json(r#"{ "modal_breakpoint_px": "wide" }"#).expect_err("should fail");
    assert!(matches!(err, FolioError::Config(_)));
}

#[test]
fn out_of_range_observer_options_are_rejected() {
    let err = SiteConfig::from_json(
        r#"{ "reveal_threshold": 7.5, "reveal_root_margin": "sideways", "stats_threshold": -1.0 }"#,
    )
    .expect_err("observer options should be validated");
    assert!(matches!(err, FolioError::InvalidSetting { field: "reveal_threshold", .. }));
}

#[test]
fn each_threshold_is_checked() {
    let err = SiteConfig::from_json(r#"{ "stats_threshold": -1.0 }"#).expect_err("should fail");
    assert!(matches!(err, FolioError::InvalidSetting { field: "stats_threshold", .. }));
    assert!(SiteConfig::from_json(r#"{ "reveal_threshold": 0.0, "stats_threshold": 1.0 }"#).is_ok());
}

#[test]
fn root_margin_must_be_px_or_percent_lengths() {
    for bad in ["sideways", "", "10em", "1px 2px 3px 4px 5px", "NaNpx", "px"] {
        let blob = format!(r#"{{ "reveal_root_margin": "{bad}" }}"#);
        let err = SiteConfig::from_json(&blob).expect_err(bad);
        assert!(matches!(err, FolioError::InvalidSetting { field: "reveal_root_margin", .. }), "{bad}");
    }
    for good in ["0px", "10%", "0px 0px -50px 0px", "-5px 10%"] {
        let blob = format!(r#"{{ "reveal_root_margin": "{good}" }}"#);
        assert!(SiteConfig::from_json(&blob).is_ok(), "{good}");
    }
}

#[test]
fn defaults_pass_validation() {
    assert!(SiteConfig::default().validate().is_ok());
}
