//! Console logging for the browser build.
//!
//! Routes the `log` facade to the devtools console and forwards panics there
//! too. Native builds log nowhere unless a test installs its own logger.

/// Install the console logger at `level` and the panic hook.
pub fn init(level: log::Level) {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(level) {
            web_sys::console::warn_1(&format!("console logger not installed: {err}").into());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::set_max_level(level.to_level_filter());
    }
}
