use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use treinogo::{AppConfig, TrainingMetricsCalculator};

#[derive(Args)]
pub struct PlansCommand {
    /// Dataset file (defaults to dashboard.dataset_path)
    #[arg(long)]
    data: Option<PathBuf>,
}

impl PlansCommand {
    pub fn execute(self, config: &AppConfig) -> Result<()> {
        let dataset = super::load_dataset(self.data.as_deref(), config)?;

        println!("Training plans ({})", dataset.plans.len());
        println!();

        for estimate in TrainingMetricsCalculator::plan_estimates(&dataset.plans) {
            let plan = estimate.plan;
            println!(
                "  {} [{}] - {} days/week, {} min/week",
                plan.name,
                plan.status.as_str(),
                plan.days_per_week,
                plan.total_weekly_minutes()
            );
            println!(
                "    ~{} km/week, ~{} km/month",
                estimate.weekly_km, estimate.monthly_km
            );
            if !plan.matches_declared_days() {
                tracing::warn!(
                    plan = %plan.name,
                    declared = plan.days_per_week,
                    scheduled = plan.training_days(),
                    "plan schedules a different number of training days than declared"
                );
            }
        }

        Ok(())
    }
}
