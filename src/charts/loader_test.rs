use std::cell::RefCell;
use std::sync::Once;

use futures::executor::block_on;
use futures::future::{Ready, ready};
use serde_json::json;

use super::*;
use crate::charts::descriptor::DASHBOARD_CHARTS;

thread_local! {
    static LOG_LINES: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Records formatted log lines for the current test thread.
struct CapturingLogger;

impl log::Log for CapturingLogger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        let line = format!("{} {}", record.level(), record.args());
        LOG_LINES.with(|lines| lines.borrow_mut().push(line));
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger;
static INSTALL_LOGGER: Once = Once::new();

fn capture_logs() {
    INSTALL_LOGGER.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(log::LevelFilter::Trace);
    });
    LOG_LINES.with(|lines| lines.borrow_mut().clear());
}

fn captured_logs() -> Vec<String> {
    LOG_LINES.with(|lines| lines.borrow().clone())
}

fn healthy_body(endpoint: &str) -> Value {
    match endpoint {
        "/api/stats/members" => json!({"total_members": 4, "members_by_status": {"active": 3, "inactive": 1}}),
        "/api/stats/finance" => json!({"total_income": 100, "total_expenses": 40, "net_balance": 60}),
        "/api/stats/events" => json!({"total_events": 5}),
        "/api/stats/documents" => json!({"total_documents": 9}),
        _ => json!({}),
    }
}

fn healthy_fetch(endpoint: &'static str) -> Ready<Result<Value, ChartError>> {
    ready(Ok(healthy_body(endpoint)))
}

fn run_with<F>(fetch: F) -> (Vec<ChartOutcome>, Vec<(ChartId, ChartConfig)>)
where
    F: Fn(&'static str) -> Ready<Result<Value, ChartError>>,
{
    let rendered = RefCell::new(Vec::new());
    let outcomes = block_on(load_charts(&DASHBOARD_CHARTS, fetch, |d: &ChartDescriptor, c: &ChartConfig| {
        rendered.borrow_mut().push((d.id, c.clone()));
        Ok(())
    }));
    (outcomes, rendered.into_inner())
}

fn rendered_ids(rendered: &[(ChartId, ChartConfig)]) -> Vec<ChartId> {
    rendered.iter().map(|(id, _)| *id).collect()
}

#[test]
fn all_healthy_endpoints_render_four_charts() {
    let (outcomes, rendered) = run_with(healthy_fetch);
    assert_eq!(outcomes.len(), 4);
    assert!(outcomes.iter().all(ChartOutcome::rendered));
    assert_eq!(
        rendered_ids(&rendered),
        vec![ChartId::Members, ChartId::Finance, ChartId::Events, ChartId::Documents]
    );
}

#[test]
fn rendered_config_carries_extracted_series() {
    let (_, rendered) = run_with(healthy_fetch);
    let (_, members) = &rendered[0];
    assert_eq!(members.data.labels, vec!["active", "inactive"]);
    assert_eq!(members.data.datasets[0].data, vec![3.0, 1.0]);
    let (_, finance) = &rendered[1];
    assert_eq!(finance.data.datasets[0].data, vec![100.0, 40.0, 60.0]);
}

#[test]
fn fetch_rejection_leaves_other_charts_rendering() {
    let (outcomes, rendered) = run_with(|endpoint| {
        if endpoint == "/api/stats/finance" {
            ready(Err(ChartError::Network { name: "TypeError".into(), message: "Failed to fetch".into() }))
        } else {
            ready(Ok(healthy_body(endpoint)))
        }
    });
    assert_eq!(rendered_ids(&rendered), vec![ChartId::Members, ChartId::Events, ChartId::Documents]);
    let failed: Vec<_> = outcomes.iter().filter(|o| !o.rendered()).map(|o| o.id).collect();
    assert_eq!(failed, vec![ChartId::Finance]);
}

#[test]
fn malformed_json_leaves_other_charts_rendering() {
    let (outcomes, rendered) = run_with(|endpoint| {
        if endpoint == "/api/stats/members" {
            ready(Err(ChartError::Parse("expected value at line 1 column 1".into())))
        } else {
            ready(Ok(healthy_body(endpoint)))
        }
    });
    assert_eq!(rendered.len(), 3);
    assert_eq!(outcomes[0].result, Err(ChartError::Parse("expected value at line 1 column 1".into())));
}

#[test]
fn unexpected_shape_is_reported_as_missing_field() {
    let (outcomes, rendered) = run_with(|endpoint| {
        if endpoint == "/api/stats/events" {
            ready(Ok(json!({"error": "Non authentifié"})))
        } else {
            ready(Ok(healthy_body(endpoint)))
        }
    });
    assert_eq!(rendered.len(), 3);
    assert_eq!(outcomes[2].result, Err(ChartError::MissingField("total_events")));
}

#[test]
fn render_failure_is_isolated_per_chart() {
    let outcomes = block_on(load_charts(&DASHBOARD_CHARTS, healthy_fetch, |d: &ChartDescriptor, _: &ChartConfig| {
        if d.id == ChartId::Documents {
            Err(ChartError::MissingElement(d.id.element_id().to_owned()))
        } else {
            Ok(())
        }
    }));
    let rendered = outcomes.iter().filter(|o| o.rendered()).count();
    assert_eq!(rendered, 3);
    assert_eq!(outcomes[3].result, Err(ChartError::MissingElement("documentsChart".into())));
}

#[test]
fn every_chart_failing_still_reports_each_outcome() {
    let (outcomes, rendered) = run_with(|_| ready(Err(ChartError::Status(401))));
    assert!(rendered.is_empty());
    assert_eq!(outcomes.len(), 4);
    assert!(outcomes.iter().all(|o| o.result == Err(ChartError::Status(401))));
}

#[test]
fn load_chart_fetches_the_descriptor_endpoint() {
    let seen = RefCell::new(Vec::new());
    let fetch = |endpoint: &'static str| {
        seen.borrow_mut().push(endpoint);
        ready(Ok(healthy_body(endpoint)))
    };
    let render = |_: &ChartDescriptor, _: &ChartConfig| -> Result<(), ChartError> { Ok(()) };
    block_on(load_chart(&DASHBOARD_CHARTS[3], &fetch, &render)).unwrap();
    assert_eq!(seen.into_inner(), vec!["/api/stats/documents"]);
}

#[test]
fn failed_chart_is_logged_with_id_name_and_message() {
    capture_logs();
    run_with(|endpoint| {
        if endpoint == "/api/stats/finance" {
            ready(Err(ChartError::Network { name: "TypeError".into(), message: "Failed to fetch".into() }))
        } else {
            ready(Ok(healthy_body(endpoint)))
        }
    });
    assert_eq!(captured_logs(), vec!["ERROR chart financeChart failed: TypeError: Failed to fetch"]);
}

#[test]
fn missing_field_is_logged_as_type_error() {
    capture_logs();
    run_with(|endpoint| {
        if endpoint == "/api/stats/documents" {
            ready(Ok(json!({"error": "Non authentifié"})))
        } else {
            ready(Ok(healthy_body(endpoint)))
        }
    });
    assert_eq!(
        captured_logs(),
        vec!["ERROR chart documentsChart failed: TypeError: missing or invalid field `total_documents`"]
    );
}

#[test]
fn successful_charts_log_no_errors() {
    capture_logs();
    run_with(healthy_fetch);
    assert!(captured_logs().iter().all(|line| !line.starts_with("ERROR")));
}
