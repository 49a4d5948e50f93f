//! Light/dark theme preference and toggle.
//!
//! The preference lives in `localStorage` and is applied as a `data-theme`
//! attribute on the `<html>` element, which the stylesheet keys off. The
//! read/toggle logic goes through [`PreferenceStore`] so it runs without a
//! browser; [`install`] wires it to the page.
//!
//! Storage is unguarded across tabs: the last writer wins.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::Cell;

use crate::error::DomError;

/// Id of the navbar control that flips the theme.
pub const SWITCHER_ID: &str = "theme-switcher";
/// Root attribute consumed by the stylesheet.
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `light`/`dark` is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Key/value persistence for the preference.
pub trait PreferenceStore {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage is unavailable.
    fn read(&self, key: &str) -> Result<Option<String>, DomError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), DomError>;
}

/// No storage at all: nothing is ever stored and every write fails.
impl<S: PreferenceStore> PreferenceStore for Option<S> {
    fn read(&self, key: &str) -> Result<Option<String>, DomError> {
        match self {
            Some(store) => store.read(key),
            None => Ok(None),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), DomError> {
        match self {
            Some(store) => store.write(key, value),
            None => Err(DomError::NoStorage),
        }
    }
}

/// Two-state theme toggle over a [`PreferenceStore`].
///
/// Persistence is best-effort: the page is restyled first, and a failed
/// write is logged. Once a theme has been applied it is the toggle's
/// starting point, so the switcher keeps working without storage.
pub struct ThemeSwitcher<S> {
    store: S,
    key: String,
    default: Theme,
    applied: Cell<Option<Theme>>,
}

impl<S: PreferenceStore> ThemeSwitcher<S> {
    pub fn new(store: S, key: impl Into<String>, default: Theme) -> Self {
        Self { store, key: key.into(), default, applied: Cell::new(None) }
    }

    /// The applied theme, else the stored one, else the default.
    ///
    /// An unreadable store counts as empty.
    #[must_use]
    pub fn current(&self) -> Theme {
        if let Some(theme) = self.applied.get() {
            return theme;
        }
        match self.store.read(&self.key) {
            Ok(stored) => stored.as_deref().and_then(Theme::parse).unwrap_or(self.default),
            Err(err) => {
                log::warn!("theme preference unreadable, using {}: {err}", self.default.as_str());
                self.default
            }
        }
    }

    /// Apply the initial theme and write it back so storage holds a valid
    /// value after the first page load.
    ///
    /// # Errors
    ///
    /// Fails only when `apply` fails.
    pub fn restore<A>(&self, apply: A) -> Result<Theme, DomError>
    where
        A: FnOnce(Theme) -> Result<(), DomError>,
    {
        self.set(self.current(), apply)
    }

    /// Apply the opposite theme and persist it.
    ///
    /// # Errors
    ///
    /// Fails only when `apply` fails.
    pub fn toggle<A>(&self, apply: A) -> Result<Theme, DomError>
    where
        A: FnOnce(Theme) -> Result<(), DomError>,
    {
        self.set(self.current().toggled(), apply)
    }

    fn set<A>(&self, theme: Theme, apply: A) -> Result<Theme, DomError>
    where
        A: FnOnce(Theme) -> Result<(), DomError>,
    {
        apply(theme)?;
        self.applied.set(Some(theme));
        if let Err(err) = self.store.write(&self.key, theme.as_str()) {
            log::warn!("theme preference not saved: {err}");
        }
        Ok(theme)
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{LocalStore, apply, install};

#[cfg(feature = "hydrate")]
mod browser {
    use super::{PreferenceStore, SWITCHER_ID, THEME_ATTRIBUTE, Theme, ThemeSwitcher};
    use crate::config::DashboardConfig;
    use crate::error::DomError;
    use crate::util::dom;

    /// [`PreferenceStore`] backed by `window.localStorage`.
    pub struct LocalStore {
        storage: web_sys::Storage,
    }

    impl LocalStore {
        /// # Errors
        ///
        /// Fails when local storage is disabled or unavailable.
        pub fn open() -> Result<Self, DomError> {
            let storage = dom::window()?.local_storage()?.ok_or(DomError::NoStorage)?;
            Ok(Self { storage })
        }
    }

    impl PreferenceStore for LocalStore {
        fn read(&self, key: &str) -> Result<Option<String>, DomError> {
            Ok(self.storage.get_item(key)?)
        }

        fn write(&self, key: &str, value: &str) -> Result<(), DomError> {
            Ok(self.storage.set_item(key, value)?)
        }
    }

    /// Set `data-theme` on the `<html>` element.
    ///
    /// # Errors
    ///
    /// Fails when there is no document root.
    pub fn apply(theme: Theme) -> Result<(), DomError> {
        let root = dom::document()?
            .document_element()
            .ok_or_else(|| DomError::MissingElement("html".to_owned()))?;
        Ok(root.set_attribute(THEME_ATTRIBUTE, theme.as_str())?)
    }

    /// Apply the stored theme and wire the switcher's click handler.
    ///
    /// Without storage the default theme is still applied and toggling works
    /// for the current page.
    ///
    /// # Errors
    ///
    /// Fails when the document root or the switcher control is missing.
    pub fn install(config: &DashboardConfig) -> Result<Theme, DomError> {
        let store = match LocalStore::open() {
            Ok(store) => Some(store),
            Err(err) => {
                log::warn!("theme preference will not persist: {err}");
                None
            }
        };
        let switcher = ThemeSwitcher::new(store, config.theme_key.clone(), config.default_theme);
        let initial = switcher.restore(apply)?;

        let control = dom::element_by_id(SWITCHER_ID)?;
        dom::listen(&control, "click", move |event: web_sys::Event| {
            // The control may be a link; stay on the page.
            event.prevent_default();
            match switcher.toggle(apply) {
                Ok(theme) => log::debug!("theme switched to {}", theme.as_str()),
                Err(err) => log::warn!("theme switch failed: {err}"),
            }
        })?;
        Ok(initial)
    }
}
