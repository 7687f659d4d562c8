//! Month-scoped filtering for dated entities.
//!
//! Dashboard pages list "this month's" races and challenges. Races are a
//! single date and match on exact year and month. Challenges span a date
//! range; their year and month are bracketed separately, which covers
//! ranges that start and end in the same year.

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::{MetricsError, MetricsResult};

/// A calendar month in a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: Month,
}

impl MonthKey {
    pub const fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// Build from a zero-based month index (0 = January), as used by the UI.
    pub fn from_zero_based(year: i32, month_index: u32) -> MetricsResult<Self> {
        Self::from_number(year, month_index.saturating_add(1)).map_err(|_| {
            MetricsError::InvalidInput(format!(
                "month index must be between 0 and 11, got {month_index}"
            ))
        })
    }

    /// Build from a one-based month number (1 = January).
    pub fn from_number(year: i32, month: u32) -> MetricsResult<Self> {
        let month = u8::try_from(month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .ok_or_else(|| {
                MetricsError::InvalidInput(format!("month must be between 1 and 12, got {month}"))
            })?;
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        // Datelike::month() is always 1..=12.
        let month = Month::try_from(date.month() as u8).unwrap_or(Month::January);
        Self {
            year: date.year(),
            month,
        }
    }

    /// Zero-based month index (0 = January).
    pub fn month_index(&self) -> u32 {
        self.month.number_from_month() - 1
    }

    /// First day of the month.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.number_from_month(), 1)
    }

    /// Whether `date` lies in this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month.number_from_month()
    }

    /// Whether this month lies within `[start, end]` using the bracketing rule:
    /// the year must be within the start and end years, and the month number
    /// within the start and end month numbers.
    pub fn bracketed_by(&self, start: NaiveDate, end: NaiveDate) -> bool {
        let month = self.month.number_from_month();
        start.year() <= self.year
            && self.year <= end.year()
            && start.month() <= month
            && month <= end.month()
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month.name(), self.year)
    }
}

/// How an entity is placed on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarSpan {
    /// A single day.
    Point(NaiveDate),
    /// An inclusive date range.
    Range { start: NaiveDate, end: NaiveDate },
}

impl CalendarSpan {
    /// Whether the span falls in or intersects `month`.
    pub fn in_month(&self, month: MonthKey) -> bool {
        match *self {
            CalendarSpan::Point(date) => month.contains(date),
            CalendarSpan::Range { start, end } => month.bracketed_by(start, end),
        }
    }
}

/// An entity that can be placed on the calendar.
pub trait MonthScoped {
    fn calendar_span(&self) -> CalendarSpan;

    /// Whether the entity falls in or intersects `month`.
    fn in_month(&self, month: MonthKey) -> bool {
        self.calendar_span().in_month(month)
    }
}

/// Items that fall in or intersect `month`, in input order.
pub fn filter_by_month<T: MonthScoped>(items: &[T], month: MonthKey) -> Vec<&T> {
    let selected: Vec<&T> = items.iter().filter(|item| item.in_month(month)).collect();
    tracing::debug!(
        month = %month,
        total = items.len(),
        selected = selected.len(),
        "filtered items by month"
    );
    selected
}
