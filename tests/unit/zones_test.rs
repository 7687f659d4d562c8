//! Unit tests for heart rate zone calculations.

use proptest::prelude::*;
use treinogo::metrics::zones::{HeartRateZones, HR_ZONE_NAMES};
use treinogo::{MetricsError, TrainingMetricsCalculator};

#[test]
fn test_hr_zones_from_max_200() {
    let zones = HeartRateZones::from_max_hr(200).unwrap();

    // Z1: 50-60% = 100-120
    assert_eq!(zones.z1_recovery.min_bpm, 100);
    assert_eq!(zones.z1_recovery.max_bpm, 120);
    assert_eq!(zones.z1_recovery.zone, 1);

    // Z2: 60-70% = 121-140
    assert_eq!(zones.z2_aerobic.min_bpm, 121);
    assert_eq!(zones.z2_aerobic.max_bpm, 140);

    // Z3: 70-80% = 141-160
    assert_eq!(zones.z3_tempo.min_bpm, 141);
    assert_eq!(zones.z3_tempo.max_bpm, 160);

    // Z4: 80-90% = 161-180
    assert_eq!(zones.z4_threshold.min_bpm, 161);
    assert_eq!(zones.z4_threshold.max_bpm, 180);

    // Z5: 90-100% = 181-200
    assert_eq!(zones.z5_maximum.min_bpm, 181);
    assert_eq!(zones.z5_maximum.max_bpm, 200);
    assert_eq!(zones.z5_maximum.zone, 5);
}

#[test]
fn test_hr_zones_from_max_175() {
    // 87.5 -> 88, 105, 122.5 -> 123, 140, 157.5 -> 158
    let zones = HeartRateZones::from_max_hr(175).unwrap();

    assert_eq!(zones.z1_recovery.min_bpm, 88);
    assert_eq!(zones.z1_recovery.max_bpm, 105);
    assert_eq!(zones.z2_aerobic.max_bpm, 123);
    assert_eq!(zones.z3_tempo.min_bpm, 124);
    assert_eq!(zones.z4_threshold.max_bpm, 158);
    assert_eq!(zones.z5_maximum.min_bpm, 159);
}

#[test]
fn test_invalid_max_hr() {
    for max in [0, -1, -190, i32::MIN] {
        let err = TrainingMetricsCalculator::compute_heart_rate_zones(max).unwrap_err();
        assert!(matches!(err, MetricsError::InvalidInput(_)), "max = {max}");
    }
}

#[test]
fn test_max_hr_of_one() {
    let zones = HeartRateZones::from_max_hr(1).unwrap();
    assert_eq!(zones.z1_recovery.min_bpm, 1);
    assert_eq!(zones.z5_maximum.max_bpm, 1);
}

#[test]
fn test_hr_zone_lookup_boundaries() {
    let zones = HeartRateZones::from_max_hr(200).unwrap();

    assert_eq!(zones.get_zone(99), 0);
    assert_eq!(zones.get_zone(100), 1);
    assert_eq!(zones.get_zone(120), 1);
    assert_eq!(zones.get_zone(121), 2);
    assert_eq!(zones.get_zone(140), 2);
    assert_eq!(zones.get_zone(141), 3);
    assert_eq!(zones.get_zone(160), 3);
    assert_eq!(zones.get_zone(161), 4);
    assert_eq!(zones.get_zone(180), 4);
    assert_eq!(zones.get_zone(181), 5);
    assert_eq!(zones.get_zone(200), 5);
}

#[test]
fn test_zone_range_contains() {
    let zones = HeartRateZones::from_max_hr(190).unwrap();
    for zone in zones.all_zones() {
        assert!(zone.contains(zone.min_bpm));
        assert!(zone.contains(zone.max_bpm));
        assert!(!zone.contains(zone.max_bpm + 1));
    }
}

#[test]
fn test_zone_names_in_order() {
    let zones = HeartRateZones::from_max_hr(180).unwrap();
    for (zone, name) in zones.all_zones().iter().zip(HR_ZONE_NAMES) {
        assert_eq!(zone.name, name);
    }
}

#[test]
fn test_try_from() {
    let zones = HeartRateZones::try_from(185).unwrap();
    assert_eq!(zones.max_heart_rate, 185);
    assert!(HeartRateZones::try_from(-5).is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_zones_are_contiguous(max in 1i32..=100_000) {
        let zones = HeartRateZones::from_max_hr(max).unwrap();
        let all = zones.all_zones();

        for pair in all.windows(2) {
            prop_assert_eq!(pair[1].min_bpm, pair[0].max_bpm + 1);
        }
        prop_assert_eq!(zones.z5_maximum.max_bpm, max as u32);
    }

    #[test]
    fn test_zones_strictly_increase(max in 10i32..=100_000) {
        let zones = HeartRateZones::from_max_hr(max).unwrap();
        let all = zones.all_zones();

        for pair in all.windows(2) {
            prop_assert!(pair[1].min_bpm > pair[0].min_bpm);
        }
        for zone in &all {
            prop_assert!(zone.min_bpm <= zone.max_bpm);
        }
    }

    #[test]
    fn test_every_bpm_in_range_has_one_zone(max in 10i32..=250) {
        let zones = HeartRateZones::from_max_hr(max).unwrap();
        for bpm in zones.z1_recovery.min_bpm..=max as u32 {
            let containing = zones.all_zones().iter().filter(|z| z.contains(bpm)).count();
            prop_assert_eq!(containing, 1);
            prop_assert!(zones.get_zone(bpm) >= 1);
        }
    }
}
