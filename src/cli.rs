use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cssd-planner", version, about = "CSSD equipment and budget planner")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the planner server (default)
    Start,

    /// Compute an estimate locally from the planning table
    Estimate {
        /// Number of hospital beds
        #[arg(short, long)]
        beds: String,

        /// Print the display model as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Render a saved /calculate response
    Render {
        /// JSON file holding the response
        file: PathBuf,

        /// Print the display model as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Submit a bed count to a running planner server
    Submit {
        /// Number of hospital beds
        #[arg(short, long)]
        beds: String,

        /// Server base URL (defaults to client.base_url from config)
        #[arg(short, long)]
        url: Option<String>,
    },

    /// Test configuration and planning data validity
    Test,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Start if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Start)
    }
}
