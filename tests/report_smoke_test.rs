use assert_float_eq::assert_float_absolute_eq;

use health_report_rs::engine::{compose_report, compose_report_from_raw, WEIGHT_MANAGEMENT_ADVICE};
use health_report_rs::error::HealthError;
use health_report_rs::models::{
    ActivityLevel, BloodType, BmiCategory, DietPreference, Gender, Goal, HealthInput, RawInput,
};

fn sample_input() -> HealthInput {
    HealthInput {
        age: 30,
        gender: Gender::Male,
        weight_kg: 75.0,
        height_cm: 175.0,
        blood_type: BloodType::OPositive,
        activity_level: ActivityLevel::Moderate,
        diet_preference: DietPreference::Balanced,
        goal: Goal::Fitness,
    }
}

fn sample_raw() -> RawInput {
    RawInput {
        age: Some(30),
        gender: Some("male".to_string()),
        weight_kg: Some(75.0),
        height_cm: Some(175.0),
        blood_type: Some("O+".to_string()),
        activity_level: Some("moderate".to_string()),
        diet_preference: Some("balanced".to_string()),
        goal: Some("fitness".to_string()),
    }
}

#[test]
fn test_end_to_end_normal_report() {
    let report = compose_report(&sample_input());

    assert_float_absolute_eq!(report.bmi, 24.49, 0.01);
    assert_eq!(report.bmi_category, BmiCategory::Normal);
    assert_float_absolute_eq!(report.bmr, 1698.75, 1e-9);
    assert_eq!(report.daily_calories, 2633);
    assert_eq!(report.ideal_weight_range_kg.min_kg, 57);
    assert_eq!(report.ideal_weight_range_kg.max_kg, 76);
    assert!(report.weight_management_advice.is_none());

    // Four balanced-diet categories plus the two fixed diet lines.
    assert_eq!(report.diet_recommendations.len(), 6);
    assert_eq!(report.diet_recommendations[0], "Whole grains");
    assert_eq!(report.exercise_recommendations[0], "Varied workouts");
    assert_eq!(
        report.general_tips.last().map(String::as_str),
        Some("Maintain these healthy habits as you age")
    );
}

#[test]
fn test_sample_profile_report() {
    assert_eq!(RawInput::sample().age, sample_raw().age);

    let report = compose_report_from_raw(&RawInput::sample()).unwrap();
    assert_eq!(report.bmi_category, BmiCategory::Normal);
    assert_eq!(report.daily_calories, 2633);
    assert_eq!(report.blood_type, BloodType::OPositive);
    assert_eq!(report.goal_label, "General Fitness");
}

#[test]
fn test_fractional_and_negative_ages_from_json() {
    let fractional: RawInput = serde_json::from_value(serde_json::json!({
        "age": 30.9, "gender": "male", "weight": 75, "height": 175,
        "bloodType": "O+", "activity": "moderate", "diet": "balanced", "goal": "fitness"
    }))
    .unwrap();
    let report = compose_report_from_raw(&fractional).unwrap();
    assert_float_absolute_eq!(report.bmr, 1698.75, 1e-9);

    let negative = RawInput {
        age: Some(-5),
        ..RawInput::sample()
    };
    let report = compose_report_from_raw(&negative).unwrap();
    assert_float_absolute_eq!(report.bmr, 1873.75, 1e-9);
}

#[test]
fn test_obese_report_includes_weight_management() {
    let input = HealthInput {
        weight_kg: 110.0,
        ..sample_input()
    };
    let report = compose_report(&input);

    assert_float_absolute_eq!(report.bmi, 35.9, 0.05);
    assert_eq!(report.bmi_category, BmiCategory::Obese);

    let advice = report
        .weight_management_advice
        .expect("obese reports carry weight management advice");
    assert_eq!(advice, WEIGHT_MANAGEMENT_ADVICE.map(String::from).to_vec());
}

#[test]
fn test_raw_and_typed_paths_agree() {
    let from_raw = compose_report_from_raw(&sample_raw()).unwrap();
    assert_eq!(from_raw, compose_report(&sample_input()));
}

#[test]
fn test_missing_fields_produce_no_report() {
    let raw = RawInput {
        blood_type: Some(String::new()),
        weight_kg: None,
        ..sample_raw()
    };

    match compose_report_from_raw(&raw) {
        Err(HealthError::MissingInput(fields)) => {
            assert_eq!(fields, vec!["weightKg".to_string(), "bloodType".to_string()]);
        }
        other => panic!("expected MissingInput, got {:?}", other),
    }
}

#[test]
fn test_unknown_blood_type_is_rejected() {
    let raw = RawInput {
        blood_type: Some("AB".to_string()),
        ..sample_raw()
    };
    assert!(matches!(
        compose_report_from_raw(&raw),
        Err(HealthError::InvalidInput(_))
    ));
}

#[test]
fn test_unknown_diet_and_goal_still_report() {
    let raw = RawInput {
        diet_preference: Some("carnivore".to_string()),
        goal: Some("bulk".to_string()),
        ..sample_raw()
    };
    let report = compose_report_from_raw(&raw).unwrap();

    assert_eq!(
        report.diet_recommendations,
        vec![
            "Stay hydrated with 8-10 glasses of water daily".to_string(),
            "Limit processed foods and added sugars".to_string(),
        ]
    );
    assert_eq!(report.goal_label, "bulk");
    assert_eq!(report.exercise_recommendations.len(), 2);
}

#[test]
fn test_older_users_get_screening_tip() {
    let input = HealthInput {
        age: 52,
        gender: Gender::Female,
        ..sample_input()
    };
    let report = compose_report(&input);
    assert!(report
        .general_tips
        .contains(&"Consider regular cardiovascular screening".to_string()));
}
