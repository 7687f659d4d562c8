//! Distance aggregation for challenges and training plans.

use crate::social::types::ChallengeParticipant;
use crate::workouts::types::{PlanSession, SessionType};

/// Fixed distance credited to a long run, in km.
pub const LONG_RUN_DISTANCE_KM: u32 = 12;

/// Estimated pace of non-long sessions, in hundredths of a km per minute (0.12 km/min).
pub const CENTI_KM_PER_MINUTE: u64 = 12;

/// Weeks in a month for monthly estimates.
pub const WEEKS_PER_MONTH: u32 = 4;

/// Recorded distance of a participant, counting missing or invalid values as zero.
pub fn participant_distance(participant: &ChallengeParticipant) -> f64 {
    participant
        .distance_km
        .filter(|km| km.is_finite() && *km > 0.0)
        .unwrap_or(0.0)
}

/// Total recorded distance across participants, in km.
pub fn sum_distance(participants: &[ChallengeParticipant]) -> f64 {
    participants.iter().map(participant_distance).sum()
}

/// Estimated distance of a single session, in km.
///
/// Long runs count a fixed 12 km. Anything else is its duration times
/// 0.12 km/min, rounded half-up.
pub fn session_distance(session: &PlanSession) -> u32 {
    match session.session_type {
        SessionType::LongRun => LONG_RUN_DISTANCE_KM,
        _ => {
            let centi_km = u64::from(session.duration_minutes) * CENTI_KM_PER_MINUTE;
            ((centi_km + 50) / 100) as u32
        }
    }
}

/// Estimated weekly distance of a plan's weekly structure, in km.
pub fn estimate_weekly_distance(weekly_structure: &[PlanSession]) -> u32 {
    weekly_structure
        .iter()
        .map(session_distance)
        .fold(0u32, u32::saturating_add)
}

/// Estimated monthly distance: four times the weekly estimate.
pub fn estimate_monthly_distance(weekly_structure: &[PlanSession]) -> u32 {
    estimate_weekly_distance(weekly_structure).saturating_mul(WEEKS_PER_MONTH)
}
