use anyhow::Result;
use colored::Colorize;
use cssd_planner::{
    client::{EstimateClient, EstimateForm},
    config::Config,
    renderer::Renderer,
    view::terminal,
};

/// Execute the submit command
///
/// Posts the bed count to a running server and displays the result.
pub async fn execute(cfg: &Config, beds: &str, url: Option<&str>) -> Result<()> {
    let mut client_cfg = cfg.client.clone();
    if let Some(url) = url {
        client_cfg.base_url = url.to_string();
    }

    let client = EstimateClient::new(&client_cfg)?;
    println!("{} {}", "Calculating...".yellow(), client.endpoint().dimmed());

    let form = EstimateForm::new(client, Renderer::new(cfg.display.currency_format()));
    let model = form.submit(beds).await;
    terminal::print(&model);

    if model.is_error() {
        anyhow::bail!("Calculation failed");
    }
    Ok(())
}
