//! Racing module for race events
//!
//! Provides the race calendar used by the races page and dashboard.

pub mod events;

// Re-export commonly used types
pub use events::{upcoming_races, Race};
