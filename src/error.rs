//! Error types shared by the dashboard behaviours.
//!
//! ERROR HANDLING
//! ==============
//! Only the chart loader reports failures per item: a [`ChartError`] is
//! logged with the chart id and execution continues with the other charts.
//! Installers return [`DomError`] and the start-up entry logs it before
//! moving on to the next behaviour.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure while fetching, reshaping or rendering one chart.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChartError {
    /// The request never produced a response.
    #[error("{message}")]
    Network { name: String, message: String },
    /// The endpoint answered with a non-success status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    /// The body was not valid JSON.
    #[error("{0}")]
    Parse(String),
    /// An expected field is absent or has the wrong type.
    #[error("missing or invalid field `{0}`")]
    MissingField(&'static str),
    /// The target element is not on the page.
    #[error("element #{0} not found")]
    MissingElement(String),
    /// The charting library rejected the configuration or is not loaded.
    #[error("{message}")]
    Render { name: String, message: String },
}

impl ChartError {
    /// Short error class name for log lines.
    ///
    /// Browser failures keep the name of the thrown JS error. The others map
    /// to the closest console class, except `HttpError` for a non-success
    /// status, which is specific to this crate.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Network { name, .. } | Self::Render { name, .. } => name.as_str(),
            Self::Status(_) => "HttpError",
            Self::Parse(_) => "SyntaxError",
            Self::MissingField(_) | Self::MissingElement(_) => "TypeError",
        }
    }
}

/// Failure while locating or mutating DOM nodes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("no global `window`")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("localStorage unavailable")]
    NoStorage,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("{name}: {message}")]
    Js { name: String, message: String },
}

/// Invalid value in the page-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[cfg(feature = "hydrate")]
mod js {
    use wasm_bindgen::{JsCast, JsValue};

    use super::{ChartError, DomError};

    /// Split a thrown JS value into `(name, message)`.
    pub(crate) fn describe(value: &JsValue) -> (String, String) {
        if let Some(err) = value.dyn_ref::<js_sys::Error>() {
            return (String::from(err.name()), String::from(err.message()));
        }
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        ("Error".to_owned(), message)
    }

    impl From<JsValue> for DomError {
        fn from(value: JsValue) -> Self {
            let (name, message) = describe(&value);
            Self::Js { name, message }
        }
    }

    impl ChartError {
        pub(crate) fn render(value: &JsValue) -> Self {
            let (name, message) = describe(value);
            Self::Render { name, message }
        }
    }

    impl From<gloo_net::Error> for ChartError {
        fn from(err: gloo_net::Error) -> Self {
            match err {
                gloo_net::Error::JsError(js) => Self::Network { name: js.name, message: js.message },
                gloo_net::Error::SerdeError(e) => Self::Parse(e.to_string()),
                gloo_net::Error::GlooError(message) => Self::Network { name: "NetworkError".to_owned(), message },
            }
        }
    }
}
