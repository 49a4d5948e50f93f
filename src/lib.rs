//! # dashboard-client
//!
//! WASM behaviours for the association dashboard's server-rendered pages:
//! statistics charts, auto-dismissed flash banners, and the light/dark theme
//! switcher with its scroll-aware navbar.
//!
//! The three behaviours are independent. [`start`] installs each one and a
//! failure in one is logged without affecting the others.
//!
//! | Module | Role |
//! |--------|------|
//! | [`charts`] | Stats fetch, reshaping and Chart.js rendering |
//! | [`util::flash`] | Flash banner dismissal |
//! | [`util::theme`] | Theme preference and switcher |
//! | [`util::navbar`] | `scrolled` body class |
//! | [`config`] | `data-*` overrides on `<html>` |
//! | [`error`] | Error types |

pub mod charts;
pub mod config;
pub mod error;
pub mod logging;
pub mod net;
pub mod util;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Entry point run by the generated JS glue once the module is instantiated.
///
/// The page loads the module with `defer`, so the DOM is parsed by now.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    use crate::charts::DASHBOARD_CHARTS;
    use crate::config::DashboardConfig;
    use crate::util::{dom, flash, navbar, theme};

    let (config, config_err) = match DashboardConfig::from_document() {
        Ok(config) => (config, None),
        Err(err) => (DashboardConfig::default(), Some(err)),
    };
    logging::init(config.log_level);
    if let Some(err) = config_err {
        log::warn!("ignoring page config: {err}");
    }
    log::debug!("dashboard client started");

    match theme::install(&config) {
        Ok(initial) => log::debug!("theme applied: {}", initial.as_str()),
        Err(err) => log::warn!("theme switcher not installed: {err}"),
    }
    if let Err(err) = navbar::install() {
        log::warn!("navbar scroll style not installed: {err}");
    }
    match flash::install(&config) {
        Ok(count) => log::debug!("scheduled {count} flash message(s)"),
        Err(err) => log::warn!("flash dismissal not installed: {err}"),
    }

    let has_charts = DASHBOARD_CHARTS
        .iter()
        .any(|d| dom::element_by_id(d.id.element_id()).is_ok());
    if has_charts {
        wasm_bindgen_futures::spawn_local(async {
            charts::loader::load_dashboard_charts().await;
        });
    }
}
