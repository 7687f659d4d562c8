//! TreinoGO - Training metrics for the coaching dashboard
//!
//! Derived values behind the coach's dashboard: heart rate training zones,
//! month-scoped race and challenge listings, challenge distance totals and
//! weekly/monthly distance estimates for training plans.

pub mod dashboard;
pub mod metrics;
pub mod racing;
pub mod social;
pub mod storage;
pub mod workouts;

// Re-export commonly used types
pub use dashboard::MonthlyOverview;
pub use metrics::{HeartRateZones, MetricsError, MonthKey, TrainingMetricsCalculator};
pub use racing::Race;
pub use social::{Challenge, ChallengeParticipant, ParticipantStatus};
pub use storage::{AppConfig, CoachDataset};
pub use workouts::{PlanSession, SessionType, TrainingPlan};
