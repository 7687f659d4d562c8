//! Metrics module for heart rate zones and month-scoped aggregations.

pub mod calculator;
pub mod calendar;
pub mod distance;
pub mod error;
pub mod zones;

pub use calculator::{ChallengeDistance, PlanEstimate, TrainingMetricsCalculator};
pub use calendar::{filter_by_month, CalendarSpan, MonthKey, MonthScoped};
pub use distance::{estimate_monthly_distance, estimate_weekly_distance, sum_distance};
pub use error::{MetricsError, MetricsResult};
pub use zones::{HRZoneRange, HeartRateZones};
