use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn empty_lookup_yields_defaults() {
    let cfg = DashboardConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, DashboardConfig::default());
    assert_eq!(cfg.theme_key, "theme");
    assert_eq!(cfg.default_theme, Theme::Dark);
    assert_eq!(cfg.flash_delay_ms, 5_000);
    assert_eq!(cfg.flash_fade_ms, 1_000);
    assert_eq!(cfg.log_level, log::Level::Info);
}

#[test]
fn overrides_are_applied() {
    let cfg = DashboardConfig::from_lookup(lookup_from(&[
        ("data-theme-key", "asso-theme"),
        ("data-default-theme", "light"),
        ("data-flash-delay-ms", "8000"),
        ("data-flash-fade-ms", "250"),
        ("data-log-level", "debug"),
    ]))
    .unwrap();
    assert_eq!(cfg.theme_key, "asso-theme");
    assert_eq!(cfg.default_theme, Theme::Light);
    assert_eq!(cfg.flash_delay_ms, 8_000);
    assert_eq!(cfg.flash_fade_ms, 250);
    assert_eq!(cfg.log_level, log::Level::Debug);
}

#[test]
fn invalid_numbers_fall_back_to_defaults() {
    let cfg = DashboardConfig::from_lookup(lookup_from(&[
        ("data-flash-delay-ms", "soon"),
        ("data-flash-fade-ms", "-1"),
    ]))
    .unwrap();
    assert_eq!(cfg.flash_delay_ms, DEFAULT_FLASH_DELAY_MS);
    assert_eq!(cfg.flash_fade_ms, DEFAULT_FLASH_FADE_MS);
}

#[test]
fn blank_theme_key_keeps_default() {
    let cfg = DashboardConfig::from_lookup(lookup_from(&[("data-theme-key", "  ")])).unwrap();
    assert_eq!(cfg.theme_key, DEFAULT_THEME_KEY);
}

#[test]
fn unknown_theme_is_rejected() {
    let err = DashboardConfig::from_lookup(lookup_from(&[("data-default-theme", "sepia")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "data-default-theme", value: "sepia".into() });
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = DashboardConfig::from_lookup(lookup_from(&[("data-log-level", "loud")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "data-log-level", value: "loud".into() });
}
