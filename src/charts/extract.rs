//! Reshape a statistics response into chart labels and values.
//!
//! Responses are untyped JSON whose shape depends on the endpoint, so the
//! mapping is keyed on [`ChartId`] rather than on a shared schema.

use serde_json::Value;

use super::descriptor::ChartId;
use crate::error::ChartError;

#[cfg(test)]
#[path = "extract_test.rs"]
mod extract_test;

/// Parallel label/value arrays for one dataset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    fn push(&mut self, label: impl Into<String>, value: f64) {
        self.labels.push(label.into());
        self.values.push(value);
    }
}

/// Extract the series for `chart` from its endpoint's JSON body.
///
/// # Errors
///
/// Returns [`ChartError::MissingField`] when an expected field is absent or
/// not numeric.
pub fn extract_series(chart: ChartId, data: &Value) -> Result<ChartSeries, ChartError> {
    let mut series = ChartSeries::default();
    match chart {
        ChartId::Members => {
            let by_status = data
                .get("members_by_status")
                .and_then(Value::as_object)
                .ok_or(ChartError::MissingField("members_by_status"))?;
            for (status, count) in by_status {
                let count = count.as_f64().ok_or(ChartError::MissingField("members_by_status"))?;
                series.push(status.as_str(), count);
            }
        }
        ChartId::Finance => {
            series.push("Revenus", number(data, "total_income")?);
            series.push("Dépenses", number(data, "total_expenses")?);
            series.push("Solde Net", number(data, "net_balance")?);
        }
        ChartId::Events => series.push("Total Événements", number(data, "total_events")?),
        ChartId::Documents => series.push("Total Documents", number(data, "total_documents")?),
    }
    Ok(series)
}

fn number(data: &Value, field: &'static str) -> Result<f64, ChartError> {
    data.get(field)
        .and_then(Value::as_f64)
        .ok_or(ChartError::MissingField(field))
}
