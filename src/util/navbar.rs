//! Navbar style change on scroll.
//!
//! Toggles the `scrolled` class on `<body>` from the window's vertical
//! offset alone. No hysteresis or debouncing: every scroll event re-applies.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

pub const SCROLLED_CLASS: &str = "scrolled";

/// Whether the page counts as scrolled at vertical offset `offset`.
///
/// Negative offsets (elastic overscroll) count as the top of the page.
#[must_use]
pub fn is_scrolled(offset: f64) -> bool {
    offset > 0.0
}

#[cfg(feature = "hydrate")]
pub use browser::install;

#[cfg(feature = "hydrate")]
mod browser {
    use super::{SCROLLED_CLASS, is_scrolled};
    use crate::error::DomError;
    use crate::util::dom;

    fn sync(window: &web_sys::Window) -> Result<bool, DomError> {
        let scrolled = is_scrolled(window.scroll_y()?);
        dom::body()?
            .class_list()
            .toggle_with_force(SCROLLED_CLASS, scrolled)?;
        Ok(scrolled)
    }

    /// Sync the class once, then on every window `scroll` event.
    ///
    /// # Errors
    ///
    /// Fails when there is no window/body or the listener cannot be added.
    pub fn install() -> Result<(), DomError> {
        let window = dom::window()?;
        sync(&window)?;
        let target = window.clone();
        dom::listen(&target, "scroll", move |_event: web_sys::Event| {
            if let Err(err) = sync(&window) {
                log::warn!("navbar scroll sync failed: {err}");
            }
        })
    }
}
