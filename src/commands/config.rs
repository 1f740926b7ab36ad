use anyhow::Result;
use colored::Colorize;
use cssd_planner::config::Config;
use tracing::info;

/// Execute the config show command
///
/// Displays the effective configuration (file + environment) as TOML
pub fn show(cfg: &Config) -> Result<()> {
    info!("Displaying effective configuration");

    println!("{}", "Current Configuration:".green().bold());
    println!();
    println!("{}", toml::to_string_pretty(cfg)?);

    Ok(())
}

/// Execute the config validate command
pub fn validate(cfg: Result<Config>) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());

    match cfg {
        Ok(cfg) => {
            println!("{}", "✓ Configuration is valid".green());
            println!();
            println!("{}", "Summary:".bold());
            println!("  Listen: {}:{}", cfg.server.host, cfg.server.port);
            println!(
                "  Planning Data: {}",
                cfg.planning
                    .data_file
                    .as_deref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "built-in table".to_string())
            );
            println!("  Calculate Service: {}", cfg.client.base_url);
            info!("Configuration validation successful");
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗ Configuration is invalid:".red(), e);
            Err(e)
        }
    }
}
