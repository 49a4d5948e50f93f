//! Auto-dismissal of flash banners.
//!
//! Every `.flash-message` present at start-up fades after a fixed delay and
//! is removed once its opacity transition ends. A fallback timer removes it
//! anyway when no `transitionend` arrives, so the element is always gone by
//! [`DismissTimeline::removal_deadline_ms`]. Messages inserted later are not
//! tracked.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

use crate::config::DashboardConfig;

pub const FLASH_SELECTOR: &str = ".flash-message";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissPhase {
    Visible,
    Fading,
    Removed,
}

/// Delay and fade window for one flash message, both in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTimeline {
    pub delay_ms: u32,
    pub fade_ms: u32,
}

impl DismissTimeline {
    #[must_use]
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self { delay_ms: config.flash_delay_ms, fade_ms: config.flash_fade_ms }
    }

    /// Latest point after start-up at which the element is removed.
    #[must_use]
    pub fn removal_deadline_ms(self) -> u64 {
        u64::from(self.delay_ms) + u64::from(self.fade_ms)
    }

    /// Phase of a message `elapsed_ms` after start-up, assuming the
    /// transition never reports completion early.
    #[must_use]
    pub fn phase_at(self, elapsed_ms: u64) -> DismissPhase {
        if elapsed_ms < u64::from(self.delay_ms) {
            DismissPhase::Visible
        } else if elapsed_ms < self.removal_deadline_ms() {
            DismissPhase::Fading
        } else {
            DismissPhase::Removed
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::install;

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;

    use super::{DismissTimeline, FLASH_SELECTOR};
    use crate::config::DashboardConfig;
    use crate::error::DomError;
    use crate::util::dom;

    fn begin_fade(message: &web_sys::HtmlElement, fade_ms: u32) -> Result<(), DomError> {
        message.style().set_property("opacity", "0")?;
        let on_end = message.clone();
        dom::listen(message, "transitionend", move |_event: web_sys::Event| on_end.remove())?;
        let fallback = message.clone();
        Timeout::new(fade_ms, move || fallback.remove()).forget();
        Ok(())
    }

    /// Schedule every flash message currently in the document.
    ///
    /// Returns the number of scheduled messages.
    ///
    /// # Errors
    ///
    /// Fails when the document cannot be queried.
    pub fn install(config: &DashboardConfig) -> Result<u32, DomError> {
        let timeline = DismissTimeline::from_config(config);
        let nodes = dom::document()?.query_selector_all(FLASH_SELECTOR)?;
        let mut scheduled = 0;
        for index in 0..nodes.length() {
            let Some(node) = nodes.get(index) else {
                continue;
            };
            let Ok(message) = node.dyn_into::<web_sys::HtmlElement>() else {
                continue;
            };
            Timeout::new(timeline.delay_ms, move || {
                if let Err(err) = begin_fade(&message, timeline.fade_ms) {
                    log::warn!("flash message fade failed: {err}");
                    message.remove();
                }
            })
            .forget();
            scheduled += 1;
        }
        Ok(scheduled)
    }
}
