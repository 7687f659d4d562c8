use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use treinogo::{AppConfig, MonthKey, MonthlyOverview};

#[derive(Args)]
pub struct MonthCommand {
    /// Year, e.g. 2025
    #[arg(long)]
    year: i32,

    /// Month number, 1-12
    #[arg(long)]
    month: u32,

    /// Dataset file (defaults to dashboard.dataset_path)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Print the overview as JSON
    #[arg(long)]
    json: bool,
}

impl MonthCommand {
    pub fn execute(self, config: &AppConfig) -> Result<()> {
        let month = MonthKey::from_number(self.year, self.month)?;
        let dataset = super::load_dataset(self.data.as_deref(), config)?;
        let overview = MonthlyOverview::build(&dataset, month, config.dashboard.top_participants);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&overview)?);
            return Ok(());
        }

        println!("Dashboard - {}", overview.month);
        println!();

        println!("Races ({})", overview.races.len());
        for race in &overview.races {
            println!(
                "  {}  {} ({}) [{}]",
                race.date,
                race.name,
                race.city,
                race.routes.join(", ")
            );
        }
        println!();

        println!("Active challenges ({})", overview.challenges.len());
        for challenge in &overview.challenges {
            println!(
                "  {} - {} participants, {:.1} km",
                challenge.name, challenge.participant_count, challenge.total_distance_km
            );
            for leader in &challenge.leaders {
                println!(
                    "    {}. {} {:.1} km",
                    leader.position, leader.name, leader.distance_km
                );
            }
        }
        println!("  Total: {:.1} km", overview.total_distance_km());
        println!();

        println!("Student activity");
        for student in &overview.students {
            println!(
                "  {:<20} {:>7.1} km in {} challenge(s)",
                student.name, student.distance_km, student.challenges
            );
        }
        println!();

        println!("Active plans ({})", overview.plans.len());
        for plan in &overview.plans {
            println!(
                "  {} - {} km/week, {} km/month",
                plan.name, plan.weekly_distance_km, plan.monthly_distance_km
            );
        }

        Ok(())
    }
}
