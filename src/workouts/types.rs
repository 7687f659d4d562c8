//! Training plan types.
//!
//! A plan is a weekly template the coach assigns to students: a list of
//! sessions, each on a weekday with a type and a duration.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Type of a planned session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    /// Conversational pace
    Easy,
    /// Weekly long run
    #[serde(alias = "long")]
    LongRun,
    /// Sustained comfortably-hard effort
    Tempo,
    /// Repeated hard efforts with recoveries
    Interval,
    /// Very light jog
    Recovery,
    /// Gym or strength work
    Strength,
    /// Day off
    Rest,
}

impl std::fmt::Display for SessionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionType::Easy => write!(f, "Easy"),
            SessionType::LongRun => write!(f, "Long Run"),
            SessionType::Tempo => write!(f, "Tempo"),
            SessionType::Interval => write!(f, "Interval"),
            SessionType::Recovery => write!(f, "Recovery"),
            SessionType::Strength => write!(f, "Strength"),
            SessionType::Rest => write!(f, "Rest"),
        }
    }
}

/// One session of a plan's weekly structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSession {
    pub day: Weekday,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    #[serde(default)]
    pub duration_minutes: u32,
}

/// Publication status of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    /// Assigned to students
    #[default]
    Active,
    /// Still being written
    Draft,
    /// No longer offered
    Archived,
}

impl PlanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Active => "active",
            PlanStatus::Draft => "draft",
            PlanStatus::Archived => "archived",
        }
    }
}

/// Weekly training plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingPlan {
    pub id: Uuid,
    pub name: String,
    /// Training category the plan belongs to
    pub category_id: Option<Uuid>,
    pub days_per_week: u8,
    #[serde(default)]
    pub weekly_structure: Vec<PlanSession>,
    #[serde(default)]
    pub status: PlanStatus,
}

impl TrainingPlan {
    /// Create an active plan with an empty week.
    pub fn new(name: impl Into<String>, days_per_week: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category_id: None,
            days_per_week,
            weekly_structure: Vec::new(),
            status: PlanStatus::Active,
        }
    }

    /// Append a session to the week.
    pub fn with_session(mut self, day: Weekday, session_type: SessionType, duration_minutes: u32) -> Self {
        self.weekly_structure.push(PlanSession {
            day,
            session_type,
            duration_minutes,
        });
        self
    }

    /// Estimated weekly distance in km.
    pub fn estimated_weekly_distance(&self) -> u32 {
        crate::metrics::distance::estimate_weekly_distance(&self.weekly_structure)
    }

    /// Estimated monthly distance in km.
    pub fn estimated_monthly_distance(&self) -> u32 {
        crate::metrics::distance::estimate_monthly_distance(&self.weekly_structure)
    }

    /// Total planned minutes per week.
    pub fn total_weekly_minutes(&self) -> u32 {
        self.weekly_structure
            .iter()
            .map(|s| s.duration_minutes)
            .fold(0u32, u32::saturating_add)
    }

    /// Number of distinct weekdays with a non-rest session.
    pub fn training_days(&self) -> usize {
        self.weekly_structure
            .iter()
            .filter(|s| s.session_type != SessionType::Rest)
            .map(|s| s.day.num_days_from_monday())
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Whether the weekly structure trains on as many days as declared.
    pub fn matches_declared_days(&self) -> bool {
        self.training_days() == usize::from(self.days_per_week)
    }
}
