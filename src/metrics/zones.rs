//! Heart rate zone calculations.
//!
//! Zones are percentage bands of the athlete's maximum heart rate. Each
//! boundary is rounded half-up on its own, so the lower bound of a zone is
//! always one beat above the upper bound of the previous zone.

use serde::{Deserialize, Serialize};

use super::error::{MetricsError, MetricsResult};

/// A heart rate zone range, inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HRZoneRange {
    /// Zone number (1-5)
    pub zone: u8,
    /// Minimum BPM
    pub min_bpm: u32,
    /// Maximum BPM
    pub max_bpm: u32,
    /// Zone name
    pub name: String,
}

impl HRZoneRange {
    /// Whether a heart rate falls inside this zone.
    pub fn contains(&self, bpm: u32) -> bool {
        self.min_bpm <= bpm && bpm <= self.max_bpm
    }

    /// Number of whole beats covered by the zone. Zero when the bounds cross.
    pub fn width(&self) -> u32 {
        if self.max_bpm < self.min_bpm {
            0
        } else {
            self.max_bpm - self.min_bpm + 1
        }
    }
}

/// Five-zone heart rate model derived from maximum heart rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateZones {
    /// Maximum heart rate the zones were derived from
    pub max_heart_rate: u32,
    /// Zone 1: Recovery (50-60% HRmax)
    pub z1_recovery: HRZoneRange,
    /// Zone 2: Aerobic (60-70% HRmax)
    pub z2_aerobic: HRZoneRange,
    /// Zone 3: Tempo (70-80% HRmax)
    pub z3_tempo: HRZoneRange,
    /// Zone 4: Threshold (80-90% HRmax)
    pub z4_threshold: HRZoneRange,
    /// Zone 5: Maximum (90-100% HRmax)
    pub z5_maximum: HRZoneRange,
}

/// Upper boundary of zones 1-4 as a percentage of HRmax.
const ZONE_UPPER_PERCENT: [u64; 4] = [60, 70, 80, 90];

/// Lower boundary of zone 1 as a percentage of HRmax.
const ZONE_FLOOR_PERCENT: u64 = 50;

/// Display names, indexed by zone number - 1.
pub const HR_ZONE_NAMES: [&str; 5] = ["Recovery", "Aerobic", "Tempo", "Threshold", "Maximum"];

/// `percent`% of `max`, rounded half-up in integer arithmetic.
fn percent_of(max: u32, percent: u64) -> u32 {
    // max <= i32::MAX, so the product fits comfortably in u64.
    ((u64::from(max) * percent + 50) / 100) as u32
}

impl HeartRateZones {
    /// Calculate heart rate zones from a maximum heart rate.
    ///
    /// Returns [`MetricsError::InvalidInput`] when `max_heart_rate <= 0`.
    /// At very small values a zone may come out with crossed bounds; the
    /// result is returned as computed and a warning is logged.
    pub fn from_max_hr(max_heart_rate: i32) -> MetricsResult<Self> {
        if max_heart_rate <= 0 {
            return Err(MetricsError::InvalidInput(format!(
                "max heart rate must be positive, got {max_heart_rate}"
            )));
        }
        let max = max_heart_rate as u32;

        let [b60, b70, b80, b90] = ZONE_UPPER_PERCENT.map(|p| percent_of(max, p));

        let range = |zone: u8, min_bpm: u32, max_bpm: u32| HRZoneRange {
            zone,
            min_bpm,
            max_bpm,
            name: HR_ZONE_NAMES[usize::from(zone - 1)].to_string(),
        };

        let zones = Self {
            max_heart_rate: max,
            z1_recovery: range(1, percent_of(max, ZONE_FLOOR_PERCENT), b60),
            z2_aerobic: range(2, b60 + 1, b70),
            z3_tempo: range(3, b70 + 1, b80),
            z4_threshold: range(4, b80 + 1, b90),
            z5_maximum: range(5, b90 + 1, max),
        };

        if zones.all_zones().iter().any(|z| z.width() == 0) {
            tracing::warn!(
                max_heart_rate = max,
                "heart rate zones contain an empty zone at this maximum"
            );
        }
        tracing::debug!(max_heart_rate = max, "computed heart rate zones");

        Ok(zones)
    }

    /// Get the zone for a given heart rate value.
    ///
    /// Returns 0 below zone 1. Values above HRmax are reported as zone 5.
    pub fn get_zone(&self, bpm: u32) -> u8 {
        if bpm < self.z1_recovery.min_bpm {
            0
        } else if bpm <= self.z1_recovery.max_bpm {
            1
        } else if bpm <= self.z2_aerobic.max_bpm {
            2
        } else if bpm <= self.z3_tempo.max_bpm {
            3
        } else if bpm <= self.z4_threshold.max_bpm {
            4
        } else {
            5
        }
    }

    /// Get the zone range for a given zone number (1-5).
    pub fn get_zone_range(&self, zone: u8) -> Option<&HRZoneRange> {
        match zone {
            1 => Some(&self.z1_recovery),
            2 => Some(&self.z2_aerobic),
            3 => Some(&self.z3_tempo),
            4 => Some(&self.z4_threshold),
            5 => Some(&self.z5_maximum),
            _ => None,
        }
    }

    /// Get all zones as a vector, Z1 first.
    pub fn all_zones(&self) -> Vec<&HRZoneRange> {
        vec![
            &self.z1_recovery,
            &self.z2_aerobic,
            &self.z3_tempo,
            &self.z4_threshold,
            &self.z5_maximum,
        ]
    }
}

impl TryFrom<i32> for HeartRateZones {
    type Error = MetricsError;

    fn try_from(max_heart_rate: i32) -> MetricsResult<Self> {
        Self::from_max_hr(max_heart_rate)
    }
}
