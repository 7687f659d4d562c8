//! Coach dataset input.
//!
//! The dashboard works on a snapshot of the coach's races, challenges and
//! plans. The snapshot is read from a JSON document and never written back.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::racing::events::Race;
use crate::social::types::Challenge;
use crate::workouts::types::TrainingPlan;

/// All entities the dashboard aggregates over.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoachDataset {
    #[serde(default)]
    pub races: Vec<Race>,
    #[serde(default)]
    pub challenges: Vec<Challenge>,
    #[serde(default)]
    pub plans: Vec<TrainingPlan>,
}

impl CoachDataset {
    /// Parse a dataset from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let dataset: CoachDataset =
            serde_json::from_str(json).map_err(|e| DatasetError::ParseError(e.to_string()))?;
        dataset.log_inverted_ranges();
        Ok(dataset)
    }

    /// Load a dataset from a JSON file.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| DatasetError::IoError(e.to_string()))?;
        let dataset = Self::from_json_str(&content)?;

        tracing::info!(
            path = %path.display(),
            races = dataset.races.len(),
            challenges = dataset.challenges.len(),
            plans = dataset.plans.len(),
            "loaded coach dataset"
        );

        Ok(dataset)
    }

    /// Serialize the dataset as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, DatasetError> {
        serde_json::to_string_pretty(self).map_err(|e| DatasetError::SerializeError(e.to_string()))
    }

    fn log_inverted_ranges(&self) {
        for challenge in self.challenges.iter().filter(|c| c.has_inverted_range()) {
            tracing::warn!(
                challenge = %challenge.name,
                start = %challenge.start_date,
                end = %challenge.end_date,
                "challenge ends before it starts"
            );
        }
    }
}

/// Dataset errors.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
