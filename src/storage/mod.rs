//! Storage module for configuration and dataset input.

pub mod config;
pub mod dataset;

pub use config::{AppConfig, CoachProfile, ConfigError, DashboardSettings};
pub use dataset::{CoachDataset, DatasetError};
