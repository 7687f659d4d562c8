//! Challenge behavior: month membership, distance totals and rankings.

use chrono::NaiveDate;
use std::cmp::Ordering;
use uuid::Uuid;

use super::types::{Challenge, ChallengeParticipant, ParticipantStatus, Standing};
use crate::metrics::calendar::{CalendarSpan, MonthKey, MonthScoped};
use crate::metrics::distance::{participant_distance, sum_distance};

impl Challenge {
    /// Create an active challenge with no participants.
    pub fn new(name: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: String::new(),
            start_date,
            end_date,
            active: true,
            participants: Vec::new(),
        }
    }

    /// Enroll a student with no distance logged yet.
    pub fn enroll(&mut self, student_id: Uuid, name: impl Into<String>) -> &mut ChallengeParticipant {
        self.participants.push(ChallengeParticipant {
            student_id,
            name: name.into(),
            distance_km: None,
            status: ParticipantStatus::Active,
        });
        let last = self.participants.len() - 1;
        &mut self.participants[last]
    }

    /// Whether the date range intersects `month`, ignoring the active flag.
    pub fn intersects_month(&self, month: MonthKey) -> bool {
        self.in_month(month)
    }

    /// Whether the challenge counts as active in `month`.
    pub fn is_active_in(&self, month: MonthKey) -> bool {
        self.active && self.intersects_month(month)
    }

    /// Total distance logged by all participants, in km.
    pub fn total_distance(&self) -> f64 {
        sum_distance(&self.participants)
    }

    /// Number of days covered, counting both ends. Zero for inverted ranges.
    pub fn duration_days(&self) -> u32 {
        let days = (self.end_date - self.start_date).num_days() + 1;
        u32::try_from(days.max(0)).unwrap_or(u32::MAX)
    }

    /// Whether the end date precedes the start date.
    pub fn has_inverted_range(&self) -> bool {
        self.end_date < self.start_date
    }

    /// Participants ranked by distance, highest first. Ties are ordered by name.
    pub fn standings(&self) -> Vec<Standing> {
        let mut ranked: Vec<(&ChallengeParticipant, f64)> = self
            .participants
            .iter()
            .map(|p| (p, participant_distance(p)))
            .collect();

        ranked.sort_by(|(a, a_km), (b, b_km)| {
            b_km.partial_cmp(a_km)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });

        ranked
            .into_iter()
            .enumerate()
            .map(|(i, (p, km))| Standing {
                position: i as u32 + 1,
                student_id: p.student_id,
                name: p.name.clone(),
                distance_km: km,
                status: p.status,
            })
            .collect()
    }

    /// The first `n` standings.
    pub fn top_standings(&self, n: usize) -> Vec<Standing> {
        let mut standings = self.standings();
        standings.truncate(n);
        standings
    }
}

impl MonthScoped for Challenge {
    fn calendar_span(&self) -> CalendarSpan {
        CalendarSpan::Range {
            start: self.start_date,
            end: self.end_date,
        }
    }
}
