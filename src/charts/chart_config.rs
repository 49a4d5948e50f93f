//! Chart.js configuration built from a descriptor and its series.
//!
//! Serialized with serde into the object literal `new Chart(el, config)`
//! expects; field names follow Chart.js camelCase.

use serde::Serialize;

use super::descriptor::{ChartDescriptor, ChartKind};
use super::extract::ChartSeries;

#[cfg(test)]
#[path = "chart_config_test.rs"]
mod chart_config_test;

/// Slice fill colours, cycled by Chart.js when there are more points.
pub const BACKGROUND_COLORS: [&str; 6] = [
    "rgba(255, 99, 132, 0.6)",
    "rgba(54, 162, 235, 0.6)",
    "rgba(255, 206, 86, 0.6)",
    "rgba(75, 192, 192, 0.6)",
    "rgba(153, 102, 255, 0.6)",
    "rgba(255, 159, 64, 0.6)",
];

/// Same hues as [`BACKGROUND_COLORS`] at full opacity.
pub const BORDER_COLORS: [&str; 6] = [
    "rgba(255, 99, 132, 1)",
    "rgba(54, 162, 235, 1)",
    "rgba(255, 206, 86, 1)",
    "rgba(75, 192, 192, 1)",
    "rgba(153, 102, 255, 1)",
    "rgba(255, 159, 64, 1)",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: Vec<&'static str>,
    pub border_color: Vec<&'static str>,
    pub border_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: Plugins,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub display: bool,
    pub text: String,
}

#[must_use]
pub fn build_chart_config(descriptor: &ChartDescriptor, series: ChartSeries) -> ChartConfig {
    ChartConfig {
        kind: descriptor.kind,
        data: ChartData {
            labels: series.labels,
            datasets: vec![Dataset {
                label: descriptor.title.to_owned(),
                data: series.values,
                background_color: BACKGROUND_COLORS.to_vec(),
                border_color: BORDER_COLORS.to_vec(),
                border_width: 1,
            }],
        },
        options: ChartOptions {
            responsive: true,
            plugins: Plugins {
                legend: Legend { position: "top" },
                title: Title { display: true, text: descriptor.title.to_owned() },
            },
        },
    }
}
