//! Monthly dashboard overview.
//!
//! Collects the month-scoped views the coach sees on the home page: races
//! in the month, active challenges with their totals and leaders, active
//! plans with distance estimates, and per-student distance across the
//! month's challenges.

use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

use crate::metrics::calculator::TrainingMetricsCalculator;
use crate::metrics::calendar::MonthKey;
use crate::metrics::distance::participant_distance;
use crate::social::types::Standing;
use crate::storage::dataset::CoachDataset;
use crate::workouts::types::PlanStatus;

/// A race listed on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceEntry {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub date: chrono::NaiveDate,
    pub routes: Vec<String>,
}

/// An active challenge with its distance total and leaders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChallengeSummary {
    pub id: Uuid,
    pub name: String,
    pub participant_count: usize,
    pub total_distance_km: f64,
    pub leaders: Vec<Standing>,
}

/// An active plan with its distance estimates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    pub id: Uuid,
    pub name: String,
    pub days_per_week: u8,
    pub weekly_distance_km: u32,
    pub monthly_distance_km: u32,
}

/// Distance a student logged across the month's active challenges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentActivity {
    pub student_id: Uuid,
    pub name: String,
    pub challenges: usize,
    pub distance_km: f64,
}

/// Everything shown on the dashboard for one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyOverview {
    pub month: MonthKey,
    pub races: Vec<RaceEntry>,
    pub challenges: Vec<ChallengeSummary>,
    pub plans: Vec<PlanSummary>,
    pub students: Vec<StudentActivity>,
}

impl MonthlyOverview {
    /// Build the overview for `month`, listing `top_n` leaders per challenge.
    pub fn build(dataset: &CoachDataset, month: MonthKey, top_n: usize) -> Self {
        let mut races: Vec<RaceEntry> =
            TrainingMetricsCalculator::races_in_month(&dataset.races, month)
                .into_iter()
                .map(|race| RaceEntry {
                    id: race.id,
                    name: race.name.clone(),
                    city: race.city.clone(),
                    date: race.date,
                    routes: race.routes.clone(),
                })
                .collect();
        races.sort_by_key(|r| r.date);

        let active = TrainingMetricsCalculator::active_challenges_in_month(&dataset.challenges, month);

        let challenges = active
            .iter()
            .map(|challenge| ChallengeSummary {
                id: challenge.id,
                name: challenge.name.clone(),
                participant_count: challenge.participants.len(),
                total_distance_km: challenge.total_distance(),
                leaders: challenge.top_standings(top_n),
            })
            .collect();

        let mut by_student: HashMap<Uuid, StudentActivity> = HashMap::new();
        for participant in active.iter().flat_map(|c| c.participants.iter()) {
            let entry = by_student
                .entry(participant.student_id)
                .or_insert_with(|| StudentActivity {
                    student_id: participant.student_id,
                    name: participant.name.clone(),
                    challenges: 0,
                    distance_km: 0.0,
                });
            entry.challenges += 1;
            entry.distance_km += participant_distance(participant);
        }
        let mut students: Vec<StudentActivity> = by_student.into_values().collect();
        students.sort_by(|a, b| {
            b.distance_km
                .total_cmp(&a.distance_km)
                .then_with(|| a.name.cmp(&b.name))
        });

        let plans = TrainingMetricsCalculator::plan_estimates(&dataset.plans)
            .into_iter()
            .filter(|e| e.plan.status == PlanStatus::Active)
            .map(|e| PlanSummary {
                id: e.plan.id,
                name: e.plan.name.clone(),
                days_per_week: e.plan.days_per_week,
                weekly_distance_km: e.weekly_km,
                monthly_distance_km: e.monthly_km,
            })
            .collect();

        let overview = Self {
            month,
            races,
            challenges,
            plans,
            students,
        };

        tracing::debug!(
            month = %month,
            races = overview.races.len(),
            challenges = overview.challenges.len(),
            plans = overview.plans.len(),
            "built monthly overview"
        );

        overview
    }

    /// Distance logged across all active challenges of the month, in km.
    pub fn total_distance_km(&self) -> f64 {
        self.challenges.iter().map(|c| c.total_distance_km).sum()
    }

    /// Combined monthly estimate of all active plans, in km.
    pub fn planned_monthly_distance_km(&self) -> u32 {
        self.plans
            .iter()
            .map(|p| p.monthly_distance_km)
            .fold(0u32, u32::saturating_add)
    }

    /// Whether there is nothing to show for the month.
    pub fn is_empty(&self) -> bool {
        self.races.is_empty() && self.challenges.is_empty()
    }
}
