//! Binding to the page's global Chart.js constructor.

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

use super::chart_config::ChartConfig;
use super::descriptor::ChartDescriptor;
use crate::error::ChartError;
use crate::util::dom;

#[wasm_bindgen]
extern "C" {
    /// A Chart.js instance. Chart.js keeps it registered against its canvas.
    pub type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(item: &web_sys::Element, config: &JsValue) -> Result<Chart, JsValue>;
}

/// Whether a global `Chart` is defined on the page.
#[must_use]
pub fn is_loaded() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("Chart")).unwrap_or(false)
}

/// Construct `new Chart(#element, config)` for `descriptor`.
///
/// # Errors
///
/// Fails when the element is missing, or when the constructor throws
/// (including when Chart.js is not loaded).
pub fn render(descriptor: &ChartDescriptor, config: &ChartConfig) -> Result<(), ChartError> {
    let element_id = descriptor.id.element_id();
    let element = dom::element_by_id(element_id).map_err(|_| ChartError::MissingElement(element_id.to_owned()))?;
    let raw = serde_json::to_string(config)
        .map_err(|e| ChartError::Render { name: "TypeError".to_owned(), message: e.to_string() })?;
    let config = js_sys::JSON::parse(&raw).map_err(|e| ChartError::render(&e))?;
    Chart::new(&element, &config).map_err(|e| ChartError::render(&e))?;
    Ok(())
}
