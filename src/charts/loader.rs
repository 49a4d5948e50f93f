//! Fetch-and-render orchestration for the dashboard charts.
//!
//! ERROR HANDLING
//! ==============
//! Each chart is isolated: a network failure, bad JSON, missing field or
//! render exception is logged with the chart id, error name and message, and
//! the other charts carry on. There is no retry, cancellation or timeout; a
//! failed chart simply stays empty.

use std::future::Future;

use futures::future::join_all;
use serde_json::Value;

use super::chart_config::{ChartConfig, build_chart_config};
use super::descriptor::{ChartDescriptor, ChartId};
use super::extract::extract_series;
use crate::error::ChartError;

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartOutcome {
    pub id: ChartId,
    pub result: Result<(), ChartError>,
}

impl ChartOutcome {
    #[must_use]
    pub fn rendered(&self) -> bool {
        self.result.is_ok()
    }
}

/// Fetch, reshape and render a single chart.
///
/// # Errors
///
/// Returns the first failure among fetch, extraction and render.
pub async fn load_chart<F, Fut, R>(descriptor: &ChartDescriptor, fetch: &F, render: &R) -> Result<(), ChartError>
where
    F: Fn(&'static str) -> Fut,
    Fut: Future<Output = Result<Value, ChartError>>,
    R: Fn(&ChartDescriptor, &ChartConfig) -> Result<(), ChartError>,
{
    let data = fetch(descriptor.endpoint).await?;
    let series = extract_series(descriptor.id, &data)?;
    let config = build_chart_config(descriptor, series);
    render(descriptor, &config)
}

/// Load every descriptor concurrently and report one outcome per chart, in
/// descriptor order. Completion order is unspecified.
pub async fn load_charts<F, Fut, R>(descriptors: &[ChartDescriptor], fetch: F, render: R) -> Vec<ChartOutcome>
where
    F: Fn(&'static str) -> Fut,
    Fut: Future<Output = Result<Value, ChartError>>,
    R: Fn(&ChartDescriptor, &ChartConfig) -> Result<(), ChartError>,
{
    let fetch = &fetch;
    let render = &render;
    let pending = descriptors.iter().map(|descriptor| async move {
        let result = load_chart(descriptor, fetch, render).await;
        if let Err(err) = &result {
            log::error!("chart {} failed: {}: {err}", descriptor.id.element_id(), err.name());
        }
        ChartOutcome { id: descriptor.id, result }
    });
    join_all(pending).await
}

/// Load the four dashboard charts against the live page.
#[cfg(feature = "hydrate")]
pub async fn load_dashboard_charts() -> Vec<ChartOutcome> {
    use super::chartjs;
    use super::descriptor::DASHBOARD_CHARTS;

    log::debug!("Chart.js global available: {}", chartjs::is_loaded());
    let outcomes = load_charts(&DASHBOARD_CHARTS, crate::net::stats::fetch_stats, chartjs::render).await;
    let rendered = outcomes.iter().filter(|o| o.rendered()).count();
    log::info!("rendered {rendered}/{} dashboard charts", outcomes.len());
    outcomes
}
