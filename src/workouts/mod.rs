//! Training plan module.
//!
//! Weekly plan templates and their distance estimates.

pub mod types;

pub use types::{PlanSession, PlanStatus, SessionType, TrainingPlan};
