use std::sync::{Arc, Mutex};

use flora_table::ingestion::{
    read_table_from_path, read_table_observed, IngestionContext, IngestionObserver, IngestionOptions,
    IngestionSeverity, IngestionStats,
};
use flora_table::TableError;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<IngestionStats>>,
    failures: Mutex<Vec<IngestionSeverity>>,
    alerts: Mutex<Vec<IngestionSeverity>>,
}

impl IngestionObserver for RecordingObserver {
    fn on_success(&self, _ctx: &IngestionContext, stats: IngestionStats) {
        self.successes.lock().unwrap().push(stats);
    }

    fn on_failure(&self, _ctx: &IngestionContext, severity: IngestionSeverity, _error: &TableError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &IngestionContext, severity: IngestionSeverity, _error: &TableError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

fn options_with(obs: Arc<RecordingObserver>, threshold: IngestionSeverity) -> IngestionOptions {
    IngestionOptions {
        observer: Some(obs),
        alert_at_or_above: threshold,
        ..Default::default()
    }
}

#[test]
fn observer_receives_stats_on_success() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = options_with(obs.clone(), IngestionSeverity::Critical);

    read_table_from_path("tests/fixtures/registry.csv", &opts).unwrap();

    let successes = obs.successes.lock().unwrap().clone();
    assert_eq!(successes, vec![IngestionStats { rows: 7, data_rows: 5 }]);
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_critical_io_error() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = options_with(obs.clone(), IngestionSeverity::Critical);

    // Missing file -> Io error -> Critical
    let _ = read_table_from_path("tests/fixtures/does_not_exist.csv", &opts).unwrap_err();

    let failures = obs.failures.lock().unwrap().clone();
    let alerts = obs.alerts.lock().unwrap().clone();
    assert_eq!(failures, vec![IngestionSeverity::Critical]);
    assert_eq!(alerts, vec![IngestionSeverity::Critical]);
}

#[test]
fn observer_receives_failure_without_alert_for_format_error() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = options_with(obs.clone(), IngestionSeverity::Critical);

    // Format error -> Error severity (not Critical) -> should not alert
    let _ = read_table_from_path("tests/fixtures/truncated.csv", &opts).unwrap_err();

    let failures = obs.failures.lock().unwrap().clone();
    assert_eq!(failures, vec![IngestionSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn lower_threshold_alerts_on_header_mismatch() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = options_with(obs.clone(), IngestionSeverity::Error);

    let _ = read_table_from_path("tests/fixtures/bad_header.csv", &opts).unwrap_err();

    assert_eq!(obs.alerts.lock().unwrap().clone(), vec![IngestionSeverity::Error]);
}

#[test]
fn in_memory_loads_are_observed_too() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = options_with(obs.clone(), IngestionSeverity::Critical);

    let text = std::fs::read_to_string("tests/fixtures/headers_only.csv").unwrap();
    let err = read_table_observed(&text, &opts).unwrap_err();

    assert!(matches!(err, TableError::TooFewRows { .. }));
    assert_eq!(obs.failures.lock().unwrap().clone(), vec![IngestionSeverity::Error]);
}
