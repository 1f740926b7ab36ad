use anyhow::Result;
use colored::Colorize;
use cssd_planner::{config::Config, server};
use tracing::info;

/// Execute the start command
///
/// Runs the server in the foreground until SIGTERM/SIGINT.
pub async fn execute(cfg: Config) -> Result<()> {
    println!("{}", "Starting CSSD planner...".green());
    info!(
        host = %cfg.server.host,
        port = cfg.server.port,
        "Starting CSSD planner in foreground mode"
    );

    server::start_server(cfg).await
}
