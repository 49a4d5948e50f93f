//! Small `web-sys` lookups shared by the installers.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::error::DomError;

/// # Errors
///
/// Fails outside a browser window.
pub fn window() -> Result<web_sys::Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// # Errors
///
/// Fails when the window has no document.
pub fn document() -> Result<web_sys::Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// # Errors
///
/// Fails when the document has no `<body>`.
pub fn body() -> Result<web_sys::HtmlElement, DomError> {
    document()?.body().ok_or(DomError::NoBody)
}

/// # Errors
///
/// Returns [`DomError::MissingElement`] when no element has `id`.
pub fn element_by_id(id: &str) -> Result<web_sys::Element, DomError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_owned()))
}

/// Attach `handler` to `target` for the lifetime of the page.
///
/// # Errors
///
/// Propagates the DOM exception if the listener cannot be added.
pub fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}
