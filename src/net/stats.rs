//! Statistics endpoint fetches.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, sent with the
//! session cookie. Native builds: a stub error, since the endpoints are only
//! reachable from the page that serves them.

#![allow(clippy::unused_async)]

use serde_json::Value;

use crate::error::ChartError;

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

/// GET `url` with `credentials: include` and parse the body as JSON.
///
/// # Errors
///
/// Returns [`ChartError::Network`] when the request fails,
/// [`ChartError::Status`] for a non-success status and [`ChartError::Parse`]
/// for an unparseable body.
pub async fn fetch_stats(url: &'static str) -> Result<Value, ChartError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await?;
        if !is_success(resp.status()) {
            return Err(ChartError::Status(resp.status()));
        }
        Ok(resp.json::<Value>().await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(unavailable(url))
    }
}

/// Whether `status` is in the 2xx range.
#[must_use]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(not(feature = "hydrate"))]
fn unavailable(url: &str) -> ChartError {
    ChartError::Network { name: "NetworkError".to_owned(), message: format!("{url}: not available outside the browser") }
}
