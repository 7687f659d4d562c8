//! Unit tests for month-scoped race and challenge filtering.

use chrono::NaiveDate;
use treinogo::metrics::calendar::filter_by_month;
use treinogo::{Challenge, MonthKey, Race, TrainingMetricsCalculator};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn month(year: i32, index: u32) -> MonthKey {
    MonthKey::from_zero_based(year, index).unwrap()
}

#[test]
fn test_race_in_january_only() {
    let races = vec![Race::new("Corrida de Reis", "Cuiabá", date(2025, 1, 7))];

    assert_eq!(filter_by_month(&races, month(2025, 0)).len(), 1);
    assert!(filter_by_month(&races, month(2025, 1)).is_empty());
}

#[test]
fn test_race_requires_same_year() {
    let races = vec![Race::new("Corrida de Reis", "Cuiabá", date(2025, 1, 7))];
    assert!(filter_by_month(&races, month(2024, 0)).is_empty());
    assert!(filter_by_month(&races, month(2026, 0)).is_empty());
}

#[test]
fn test_races_keep_input_order() {
    let races = vec![
        Race::new("Noturna", "Goiânia", date(2025, 3, 29)),
        Race::new("Matinal", "Goiânia", date(2025, 3, 2)),
        Race::new("Abril", "Goiânia", date(2025, 4, 2)),
    ];
    let march = TrainingMetricsCalculator::races_in_month(&races, month(2025, 2));
    let names: Vec<&str> = march.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Noturna", "Matinal"]);
}

#[test]
fn test_challenge_spanning_two_months() {
    let challenges = vec![Challenge::new("Verão", date(2025, 1, 10), date(2025, 2, 20))];

    assert_eq!(
        TrainingMetricsCalculator::active_challenges_in_month(&challenges, month(2025, 0)).len(),
        1
    );
    assert_eq!(
        TrainingMetricsCalculator::active_challenges_in_month(&challenges, month(2025, 1)).len(),
        1
    );
    assert!(TrainingMetricsCalculator::active_challenges_in_month(&challenges, month(2025, 2)).is_empty());
}

#[test]
fn test_inactive_challenge_excluded() {
    let mut challenge = Challenge::new("Pausado", date(2025, 1, 10), date(2025, 2, 20));
    challenge.active = false;
    let challenges = vec![challenge];

    assert!(TrainingMetricsCalculator::active_challenges_in_month(&challenges, month(2025, 0)).is_empty());
}

#[test]
fn test_single_day_challenge() {
    let challenges = vec![Challenge::new("Dia do Desafio", date(2025, 5, 31), date(2025, 5, 31))];
    assert_eq!(
        TrainingMetricsCalculator::active_challenges_in_month(&challenges, month(2025, 4)).len(),
        1
    );
    assert!(TrainingMetricsCalculator::active_challenges_in_month(&challenges, month(2025, 5)).is_empty());
}

#[test]
fn test_month_index_out_of_range() {
    assert!(MonthKey::from_zero_based(2025, 12).is_err());
    assert!(MonthKey::from_number(2025, 0).is_err());
}
