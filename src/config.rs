//! Page-level configuration read from `data-*` attributes on `<html>`.
//!
//! The server template may override any default by emitting the matching
//! attribute, e.g. `<html data-flash-delay-ms="8000">`.

use std::str::FromStr;

use crate::error::ConfigError;
use crate::util::theme::Theme;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_THEME_KEY: &str = "theme";
pub const DEFAULT_FLASH_DELAY_MS: u32 = 5_000;
pub const DEFAULT_FLASH_FADE_MS: u32 = 1_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// `localStorage` key holding the theme preference.
    pub theme_key: String,
    pub default_theme: Theme,
    /// Delay before a flash message starts fading.
    pub flash_delay_ms: u32,
    /// Removal fallback when no `transitionend` arrives after the fade starts.
    pub flash_fade_ms: u32,
    pub log_level: log::Level,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            theme_key: DEFAULT_THEME_KEY.to_owned(),
            default_theme: Theme::Dark,
            flash_delay_ms: DEFAULT_FLASH_DELAY_MS,
            flash_fade_ms: DEFAULT_FLASH_FADE_MS,
            log_level: log::Level::Info,
        }
    }
}

impl DashboardConfig {
    /// Build the config from an attribute lookup.
    ///
    /// Optional:
    /// - `data-theme-key`: storage key, default `theme`
    /// - `data-default-theme`: `light` or `dark` (default)
    /// - `data-flash-delay-ms`: default 5000
    /// - `data-flash-fade-ms`: default 1000
    /// - `data-log-level`: `error`..`trace`, default `info`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an unknown theme or log level.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let theme_key = lookup("data-theme-key")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_THEME_KEY.to_owned());

        let default_theme = match lookup("data-default-theme") {
            Some(raw) => Theme::parse(raw.trim())
                .ok_or(ConfigError::Invalid { key: "data-default-theme", value: raw })?,
            None => Theme::Dark,
        };

        let log_level = match lookup("data-log-level") {
            Some(raw) => log::Level::from_str(raw.trim())
                .map_err(|_| ConfigError::Invalid { key: "data-log-level", value: raw })?,
            None => log::Level::Info,
        };

        Ok(Self {
            theme_key,
            default_theme,
            flash_delay_ms: parse_u32(lookup("data-flash-delay-ms"), DEFAULT_FLASH_DELAY_MS),
            flash_fade_ms: parse_u32(lookup("data-flash-fade-ms"), DEFAULT_FLASH_FADE_MS),
            log_level,
        })
    }

    /// Read the config from the attributes of the document's root element.
    ///
    /// # Errors
    ///
    /// Same as [`DashboardConfig::from_lookup`].
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Result<Self, ConfigError> {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        match root {
            Some(root) => Self::from_lookup(|name| root.get_attribute(name)),
            None => Ok(Self::default()),
        }
    }
}

fn parse_u32(raw: Option<String>, default: u32) -> u32 {
    match raw.as_deref().map(|v| v.trim().parse::<u32>()) {
        Some(Ok(value)) => value,
        _ => default,
    }
}
