//! Unit tests for the monthly dashboard overview built from a dataset file.

use treinogo::{CoachDataset, MonthKey, MonthlyOverview};

const DATASET: &str = r#"{
    "races": [
        {
            "id": "0b5c1a9e-1d2f-4e3a-8b4c-5d6e7f809102",
            "name": "Corrida de Reis",
            "city": "Cuiabá",
            "routes": ["5K", "10K"],
            "date": "2025-01-07"
        },
        {
            "id": "1c6d2b0f-2e3a-4f4b-9c5d-6e7f80910213",
            "name": "Meia do Sol",
            "city": "Natal",
            "routes": ["21K"],
            "date": "2025-02-09"
        }
    ],
    "challenges": [
        {
            "id": "2d7e3c1a-3f4b-4a5c-8d6e-7f8091021324",
            "name": "Verão 100K",
            "description": "100 km entre janeiro e fevereiro",
            "start_date": "2025-01-10",
            "end_date": "2025-02-20",
            "active": true,
            "participants": [
                {
                    "student_id": "3e8f4d2b-4a5c-4b6d-9e7f-809102132435",
                    "name": "Ana",
                    "distance_km": 42.0,
                    "status": "active"
                },
                {
                    "student_id": "4f905e3c-5b6d-4c7e-8f80-910213243546",
                    "name": "Bruno",
                    "distance_km": 61.5,
                    "status": "completed"
                },
                {
                    "student_id": "50a16f4d-6c7e-4d8f-9091-021324354657",
                    "name": "Carla",
                    "status": "withdrawn"
                }
            ]
        }
    ],
    "plans": [
        {
            "id": "61b2705e-7d8f-4e90-8102-132435465768",
            "name": "5K Iniciante",
            "category_id": null,
            "days_per_week": 3,
            "weekly_structure": [
                {"day": "Mon", "type": "easy", "duration_minutes": 30},
                {"day": "Wed", "type": "interval", "duration_minutes": 40},
                {"day": "Sat", "type": "long", "duration_minutes": 60}
            ],
            "status": "active"
        },
        {
            "id": "72c3816f-8e90-4fa1-9213-243546576879",
            "name": "Rascunho",
            "category_id": null,
            "days_per_week": 2,
            "status": "draft"
        }
    ]
}"#;

fn load() -> CoachDataset {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("coach.json");
    std::fs::write(&path, DATASET).unwrap();
    CoachDataset::load(&path).unwrap()
}

#[test]
fn test_january_overview() {
    let dataset = load();
    let month = MonthKey::from_zero_based(2025, 0).unwrap();
    let overview = MonthlyOverview::build(&dataset, month, 2);

    assert_eq!(overview.races.len(), 1);
    assert_eq!(overview.races[0].name, "Corrida de Reis");

    assert_eq!(overview.challenges.len(), 1);
    let challenge = &overview.challenges[0];
    assert_eq!(challenge.participant_count, 3);
    assert_eq!(challenge.total_distance_km, 103.5);
    assert_eq!(challenge.leaders.len(), 2);
    assert_eq!(challenge.leaders[0].name, "Bruno");
    assert_eq!(challenge.leaders[1].name, "Ana");

    assert_eq!(overview.students.len(), 3);
    assert_eq!(overview.students[2].name, "Carla");
    assert_eq!(overview.students[2].distance_km, 0.0);

    // Draft plan is left out; 4 + 5 + 12 per week
    assert_eq!(overview.plans.len(), 1);
    assert_eq!(overview.plans[0].weekly_distance_km, 21);
    assert_eq!(overview.plans[0].monthly_distance_km, 84);
}

#[test]
fn test_february_and_march() {
    let dataset = load();

    let february = MonthlyOverview::build(&dataset, MonthKey::from_zero_based(2025, 1).unwrap(), 3);
    assert_eq!(february.races.len(), 1);
    assert_eq!(february.races[0].name, "Meia do Sol");
    assert_eq!(february.challenges.len(), 1);

    let march = MonthlyOverview::build(&dataset, MonthKey::from_zero_based(2025, 2).unwrap(), 3);
    assert!(march.is_empty());
}

#[test]
fn test_overview_serializes() {
    let dataset = load();
    let overview = MonthlyOverview::build(&dataset, MonthKey::from_zero_based(2025, 0).unwrap(), 1);
    let json = serde_json::to_value(&overview).unwrap();

    assert_eq!(json["races"][0]["city"], "Cuiabá");
    assert_eq!(json["challenges"][0]["leaders"][0]["position"], 1);
}
