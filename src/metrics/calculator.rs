//! Training metrics calculator.
//!
//! Entry point used by the dashboard, challenge and race pages. Every
//! method is a pure function of its arguments.

use crate::metrics::calendar::{filter_by_month, MonthKey, MonthScoped};
use crate::metrics::distance;
use crate::metrics::error::MetricsResult;
use crate::metrics::zones::HeartRateZones;
use crate::racing::events::Race;
use crate::social::types::{Challenge, ChallengeParticipant};
use crate::workouts::types::{PlanSession, TrainingPlan};

/// Distance total for one challenge.
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeDistance<'a> {
    pub challenge: &'a Challenge,
    pub total_km: f64,
}

/// Weekly and monthly distance estimate for one plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEstimate<'a> {
    pub plan: &'a TrainingPlan,
    pub weekly_km: u32,
    pub monthly_km: u32,
}

/// Stateless calculator for derived training metrics.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrainingMetricsCalculator;

impl TrainingMetricsCalculator {
    /// Heart rate zones for a maximum heart rate.
    pub fn compute_heart_rate_zones(max_heart_rate: i32) -> MetricsResult<HeartRateZones> {
        HeartRateZones::from_max_hr(max_heart_rate)
    }

    /// Items that fall in or intersect the given month.
    pub fn filter_by_month<T: MonthScoped>(items: &[T], month: MonthKey) -> Vec<&T> {
        filter_by_month(items, month)
    }

    /// Races dated in the given month.
    pub fn races_in_month(races: &[Race], month: MonthKey) -> Vec<&Race> {
        filter_by_month(races, month)
    }

    /// Challenges that intersect the given month and are flagged active.
    pub fn active_challenges_in_month(challenges: &[Challenge], month: MonthKey) -> Vec<&Challenge> {
        filter_by_month(challenges, month)
            .into_iter()
            .filter(|c| c.active)
            .collect()
    }

    /// Total recorded distance of a set of participants.
    pub fn sum_distance(participants: &[ChallengeParticipant]) -> f64 {
        distance::sum_distance(participants)
    }

    /// Total distance of each challenge, in input order.
    pub fn challenge_distances(challenges: &[Challenge]) -> Vec<ChallengeDistance<'_>> {
        challenges
            .iter()
            .map(|challenge| ChallengeDistance {
                challenge,
                total_km: distance::sum_distance(&challenge.participants),
            })
            .collect()
    }

    /// Estimated weekly distance of a weekly structure.
    pub fn estimate_weekly_distance(weekly_structure: &[PlanSession]) -> u32 {
        distance::estimate_weekly_distance(weekly_structure)
    }

    /// Estimated monthly distance of a weekly structure.
    pub fn estimate_monthly_distance(weekly_structure: &[PlanSession]) -> u32 {
        distance::estimate_monthly_distance(weekly_structure)
    }

    /// Weekly and monthly estimates for each plan, in input order.
    pub fn plan_estimates(plans: &[TrainingPlan]) -> Vec<PlanEstimate<'_>> {
        plans
            .iter()
            .map(|plan| PlanEstimate {
                plan,
                weekly_km: distance::estimate_weekly_distance(&plan.weekly_structure),
                monthly_km: distance::estimate_monthly_distance(&plan.weekly_structure),
            })
            .collect()
    }
}
