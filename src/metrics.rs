use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Outcome label values for `cssd_calculations_total`
pub mod outcome {
    pub const SUCCESS: &str = "success";
    pub const INVALID_INPUT: &str = "invalid_input";
    pub const NO_MATCH: &str = "no_match";
}

/// Install the Prometheus recorder
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    init_metric_descriptions();

    Ok(handle)
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!(
        "cssd_calculations_total",
        "Total number of /calculate requests by outcome"
    );
    describe_histogram!(
        "cssd_equipment_items",
        "Number of equipment items per successful estimate"
    );
    describe_histogram!(
        "cssd_calculation_duration_seconds",
        "Time spent computing an estimate"
    );
    describe_gauge!(
        "cssd_planner_info",
        "Planner version and build information"
    );

    gauge!("cssd_planner_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record a calculate request
pub fn record_calculation(outcome: &'static str) {
    counter!("cssd_calculations_total", "outcome" => outcome).increment(1);
}

/// Record the size of a successful estimate
pub fn record_equipment_items(count: usize) {
    histogram!("cssd_equipment_items").record(count as f64);
}

/// Record calculation duration
pub fn record_duration(duration: Duration) {
    histogram!("cssd_calculation_duration_seconds").record(duration.as_secs_f64());
}
