use anyhow::Result;
use cssd_planner::{
    config::Config,
    models::EstimateResponse,
    planning::{requirements_for, PlanningData, NO_REQUIREMENTS},
    renderer::{DisplayModel, Renderer},
    validation::parse_bed_count,
    view::terminal,
};
use tracing::info;

/// Execute the estimate command
///
/// Same lookup as POST /calculate, without the server.
pub fn execute(cfg: &Config, beds: &str, json: bool) -> Result<()> {
    let planning = PlanningData::load_or_fallback(
        cfg.planning.data_file.as_deref(),
        cfg.planning.fallback_on_error,
    )?;

    let response = estimate(&planning, beds);
    let model = Renderer::new(cfg.display.currency_format()).render(&response);

    output(&model, json)
}

fn estimate(planning: &PlanningData, beds: &str) -> EstimateResponse {
    let bed_count = match parse_bed_count(beds) {
        Ok(count) => count,
        Err(e) => return EstimateResponse::error(e.to_string()),
    };

    info!(bed_count, "Computing estimate from local planning table");
    requirements_for(planning, bed_count).unwrap_or_else(|| EstimateResponse::error(NO_REQUIREMENTS))
}

pub(crate) fn output(model: &DisplayModel, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(model)?);
    } else {
        terminal::print(model);
    }
    Ok(())
}
