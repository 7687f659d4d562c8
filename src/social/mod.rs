//! Social features module
//!
//! Provides challenges, their participants and rankings.

pub mod challenges;
pub mod types;

// Re-export commonly used types
pub use types::*;
