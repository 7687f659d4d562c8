use anyhow::{Context, Result};
use clap::Args;

use treinogo::{AppConfig, TrainingMetricsCalculator};

#[derive(Args)]
pub struct ZonesCommand {
    /// Maximum heart rate in bpm (defaults to coach.max_heart_rate)
    #[arg(long, allow_negative_numbers = true)]
    max_hr: Option<i32>,

    /// Report which zone this heart rate falls in
    #[arg(long)]
    bpm: Option<u32>,
}

impl ZonesCommand {
    pub fn execute(self, config: &AppConfig) -> Result<()> {
        let max_hr = self
            .max_hr
            .or(config.coach.max_heart_rate)
            .context("no maximum heart rate: pass --max-hr or set coach.max_heart_rate")?;

        let zones = TrainingMetricsCalculator::compute_heart_rate_zones(max_hr)?;

        println!("Heart rate zones (HRmax {} bpm)", zones.max_heart_rate);
        println!();
        for zone in zones.all_zones() {
            println!(
                "  Z{}  {:<10} {:>3} - {:>3} bpm",
                zone.zone, zone.name, zone.min_bpm, zone.max_bpm
            );
        }

        if let Some(bpm) = self.bpm {
            println!();
            match zones.get_zone(bpm) {
                0 => println!("{bpm} bpm is below zone 1"),
                z => println!("{bpm} bpm is in zone {z}"),
            }
        }

        Ok(())
    }
}
