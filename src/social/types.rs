//! Core types for challenges.
//!
//! A challenge is a time-bounded campaign that students enroll in; the
//! coach tracks the distance each of them has logged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Participation status of a student in a challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantStatus {
    /// Enrolled and still logging distance
    #[default]
    Active,
    /// Reached the challenge goal
    Completed,
    /// Left the challenge
    Withdrawn,
}

impl ParticipantStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipantStatus::Active => "active",
            ParticipantStatus::Completed => "completed",
            ParticipantStatus::Withdrawn => "withdrawn",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(ParticipantStatus::Active),
            "completed" => Some(ParticipantStatus::Completed),
            "withdrawn" => Some(ParticipantStatus::Withdrawn),
            _ => None,
        }
    }
}

impl std::fmt::Display for ParticipantStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParticipantStatus::Active => write!(f, "Active"),
            ParticipantStatus::Completed => write!(f, "Completed"),
            ParticipantStatus::Withdrawn => write!(f, "Withdrawn"),
        }
    }
}

/// A student enrolled in a challenge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeParticipant {
    pub student_id: Uuid,
    pub name: String,
    /// Distance logged so far, if any
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub status: ParticipantStatus,
}

/// Challenge definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Whether the coach has the challenge switched on
    pub active: bool,
    #[serde(default)]
    pub participants: Vec<ChallengeParticipant>,
}

/// A participant's place in a challenge ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standing {
    /// 1-based position
    pub position: u32,
    pub student_id: Uuid,
    pub name: String,
    pub distance_km: f64,
    pub status: ParticipantStatus,
}
