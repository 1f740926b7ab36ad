use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::renderer::{CurrencyFormat, Grouping};

/// Environment variable prefix, e.g. `CSSD_PLANNER__SERVER__PORT=8080`
pub const ENV_PREFIX: &str = "CSSD_PLANNER";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub planning: PlanningConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// "text" or "json"
    pub log_format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlanningConfig {
    /// TOML planning table; the built-in table is used when unset
    pub data_file: Option<PathBuf>,
    /// Use the built-in table when the file cannot be loaded
    pub fallback_on_error: bool,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            data_file: Some(PathBuf::from("data/cssd_planning.toml")),
            fallback_on_error: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency_symbol: String,
    pub grouping: Grouping,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let format = CurrencyFormat::default();
        Self {
            currency_symbol: format.symbol,
            grouping: format.grouping,
        }
    }
}

impl DisplayConfig {
    pub fn currency_format(&self) -> CurrencyFormat {
        CurrencyFormat::new(self.currency_symbol.clone(), self.grouping)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the calculate service
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout_seconds: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub endpoint: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "/metrics".to_string(),
        }
    }
}

/// Load configuration from `path` (optional) layered with environment variables
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.server.port == 0 {
        anyhow::bail!("Server port must be non-zero");
    }

    match cfg.server.log_format.as_str() {
        "text" | "json" => {}
        other => anyhow::bail!("Invalid log format '{}' (expected 'text' or 'json')", other),
    }

    if cfg.display.currency_symbol.is_empty() {
        anyhow::bail!("Currency symbol cannot be empty");
    }

    if !cfg.client.base_url.starts_with("http://") && !cfg.client.base_url.starts_with("https://") {
        anyhow::bail!("Client base URL must start with http:// or https://");
    }

    if cfg.client.timeout_seconds == 0 {
        anyhow::bail!("Client timeout must be at least one second");
    }

    if cfg.metrics.enabled && !cfg.metrics.endpoint.starts_with('/') {
        anyhow::bail!("Metrics endpoint must start with '/'");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = Config::default();
        assert!(validate_config(&cfg).is_ok());
        assert_eq!(cfg.server.port, 5000);
        assert_eq!(cfg.display.currency_format(), CurrencyFormat::default());
    }

    #[test]
    fn test_validate_rejects_log_format() {
        let mut cfg = Config::default();
        cfg.server.log_format = "xml".to_string();

        let result = validate_config(&cfg);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log format"));
    }

    #[test]
    fn test_validate_rejects_client_url() {
        let mut cfg = Config::default();
        cfg.client.base_url = "localhost:5000".to_string();
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
host = "127.0.0.1"
port = 8088
log_level = "debug"
log_format = "json"

[display]
currency_symbol = "$"
grouping = "western"
"#
        )
        .unwrap();

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.server.port, 8088);
        assert_eq!(cfg.display.grouping, Grouping::Western);
        assert!(cfg.planning.fallback_on_error);
    }

    #[test]
    fn test_load_config_missing_file_uses_defaults() {
        let cfg = load_config(Path::new("/nonexistent/cssd-planner.toml")).unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
    }
}
