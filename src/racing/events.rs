//! Race events.
//!
//! A race is a dated event in a city with one or more distance categories
//! ("routes"), such as "5K" or "21K".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::metrics::calendar::{CalendarSpan, MonthKey, MonthScoped};

/// Race event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Race {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    /// Distance labels offered by the race, e.g. "5K", "10K"
    #[serde(default)]
    pub routes: Vec<String>,
    pub date: NaiveDate,
}

impl Race {
    /// Create a race with no routes.
    pub fn new(name: impl Into<String>, city: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            city: city.into(),
            routes: Vec::new(),
            date,
        }
    }

    /// Add a distance category.
    pub fn with_route(mut self, label: impl Into<String>) -> Self {
        self.routes.push(label.into());
        self
    }

    /// Whether the race is dated in `month`.
    pub fn falls_in(&self, month: MonthKey) -> bool {
        self.in_month(month)
    }

    /// Whether the race offers a route, compared case-insensitively.
    pub fn has_route(&self, label: &str) -> bool {
        self.routes.iter().any(|r| r.eq_ignore_ascii_case(label.trim()))
    }

    /// Days from `today` until the race. Negative once it has passed.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.date - today).num_days()
    }
}

impl MonthScoped for Race {
    fn calendar_span(&self) -> CalendarSpan {
        CalendarSpan::Point(self.date)
    }
}

/// Races on or after `today`, soonest first.
pub fn upcoming_races(races: &[Race], today: NaiveDate) -> Vec<&Race> {
    let mut upcoming: Vec<&Race> = races.iter().filter(|r| r.date >= today).collect();
    upcoming.sort_by_key(|r| r.date);
    upcoming
}
