use anyhow::{Context, Result};
use cssd_planner::{config::Config, models::EstimateResponse, renderer::Renderer};
use std::path::Path;

use super::estimate::output;

/// Execute the render command
///
/// Reads a saved /calculate response and displays it.
pub fn execute(cfg: &Config, file: &Path, json: bool) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let response: EstimateResponse = serde_json::from_str(&text)
        .with_context(|| format!("{} is not an estimate response", file.display()))?;

    let model = Renderer::new(cfg.display.currency_format()).render(&response);
    output(&model, json)
}
