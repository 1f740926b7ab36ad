use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cssd_planner::{config, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Logging settings come from the config file; fall back to defaults if it
    // is broken so the command can still report the problem
    let cfg = config::load_config(&args.config);
    let server_cfg = cfg
        .as_ref()
        .map(|c| c.server.clone())
        .unwrap_or_default();
    init_tracing(&server_cfg.log_level, server_cfg.log_format == "json");

    match args.get_command() {
        cli::Commands::Start => commands::start::execute(cfg?).await?,
        cli::Commands::Estimate { beds, json } => commands::estimate::execute(&cfg?, &beds, json)?,
        cli::Commands::Render { file, json } => commands::render::execute(&cfg?, &file, json)?,
        cli::Commands::Submit { beds, url } => {
            commands::submit::execute(&cfg?, &beds, url.as_deref()).await?
        }
        cli::Commands::Test => commands::test::execute(cfg?)?,
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&cfg?)?,
            cli::ConfigCommands::Validate => commands::config::validate(cfg)?,
        },
        cli::Commands::Version => {
            println!("CSSD Planner v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
