use anyhow::{bail, Result};
use clap::Subcommand;
use std::path::Path;

use treinogo::storage::config::{get_config_path, save_config_to, to_toml};
use treinogo::AppConfig;

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the active configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl ConfigCommand {
    pub fn execute(self, config: &AppConfig, explicit_path: Option<&Path>) -> Result<()> {
        let path = explicit_path
            .map(Path::to_path_buf)
            .unwrap_or_else(get_config_path);

        match self {
            ConfigCommand::Show => {
                println!("# {}", path.display());
                print!("{}", to_toml(config)?);
            }
            ConfigCommand::Init { force } => {
                if path.exists() && !force {
                    bail!("{} already exists (use --force to overwrite)", path.display());
                }
                save_config_to(&AppConfig::default(), &path)?;
                println!("Wrote {}", path.display());
            }
        }

        Ok(())
    }
}
