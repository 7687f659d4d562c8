mod config_cmd;
mod month;
mod plans;
mod zones;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use treinogo::storage::config::{load_config, load_config_from};
use treinogo::{AppConfig, CoachDataset};

pub use config_cmd::ConfigCommand;
pub use month::MonthCommand;
pub use plans::PlansCommand;
pub use zones::ZonesCommand;

#[derive(Parser)]
#[command(name = "treinogo")]
#[command(about = "Training metrics for the TreinoGO coaching dashboard", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "TREINOGO_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show heart rate training zones
    Zones(ZonesCommand),

    /// Show the dashboard overview for a month
    Month(MonthCommand),

    /// Show distance estimates for training plans
    Plans(PlansCommand),

    /// Show or initialize the configuration file
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        let config = match &self.config {
            Some(path) => load_config_from(path),
            None => load_config(),
        }
        .context("failed to load configuration")?;

        match self.command {
            Commands::Zones(cmd) => cmd.execute(&config),
            Commands::Month(cmd) => cmd.execute(&config),
            Commands::Plans(cmd) => cmd.execute(&config),
            Commands::Config(cmd) => cmd.execute(&config, self.config.as_deref()),
        }
    }
}

/// Load the dataset from `explicit`, or from the configured default path.
pub(crate) fn load_dataset(explicit: Option<&Path>, config: &AppConfig) -> Result<CoachDataset> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(|| config.dashboard.dataset_path.clone())
        .context("no dataset given: pass --data or set dashboard.dataset_path in the config")?;

    CoachDataset::load(&path).with_context(|| format!("failed to load dataset {}", path.display()))
}
