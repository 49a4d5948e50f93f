//! Dashboard statistics charts.
//!
//! Four fixed [`ChartDescriptor`]s each pair a stats endpoint with a target
//! element. The loader fetches every endpoint concurrently, reshapes the JSON
//! into a [`ChartSeries`], builds a Chart.js config and hands it to the page's
//! global `Chart` constructor.
//!
//! | Module | Role |
//! |--------|------|
//! | [`descriptor`] | Static chart table |
//! | [`extract`] | Per-chart JSON to labels/values mapping |
//! | [`chart_config`] | Chart.js configuration shape |
//! | [`loader`] | Concurrent fetch/render orchestration |

pub mod chart_config;
#[cfg(feature = "hydrate")]
pub mod chartjs;
pub mod descriptor;
pub mod extract;
pub mod loader;

pub use chart_config::{ChartConfig, build_chart_config};
pub use descriptor::{ChartDescriptor, ChartId, ChartKind, DASHBOARD_CHARTS};
pub use extract::{ChartSeries, extract_series};
pub use loader::{ChartOutcome, load_charts};
