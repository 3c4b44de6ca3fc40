use tracing::debug;

use crate::engine::calculations::{
    classify_bmi, compute_bmi, compute_bmr, compute_daily_calories, compute_ideal_weight_range,
};
use crate::engine::constants::{goal_label, BLOOD_TYPE_DISCLAIMER};
use crate::engine::recommendations::{
    diet_section, exercise_section, general_tips, lookup_blood_profile, weight_management_advice,
};
use crate::error::Result;
use crate::models::{HealthInput, HealthReport, RawInput};

/// Compose the full report for a validated input record.
pub fn compose_report(input: &HealthInput) -> HealthReport {
    let bmi = compute_bmi(input.weight_kg, input.height_cm);
    let bmi_category = classify_bmi(bmi);
    let bmr = compute_bmr(input.weight_kg, input.height_cm, input.age, input.gender);
    let daily_calories = compute_daily_calories(bmr, input.activity_level);
    let ideal_weight_range_kg = compute_ideal_weight_range(input.height_cm);

    debug!(
        bmi,
        category = %bmi_category,
        bmr,
        daily_calories,
        ideal_min = ideal_weight_range_kg.min_kg,
        ideal_max = ideal_weight_range_kg.max_kg,
        "computed health metrics"
    );

    HealthReport {
        bmi,
        bmi_category,
        bmr,
        daily_calories,
        activity_level: input.activity_level,
        ideal_weight_range_kg,
        blood_type: input.blood_type,
        blood_profile: *lookup_blood_profile(input.blood_type),
        blood_type_disclaimer: BLOOD_TYPE_DISCLAIMER,
        diet_preference: input.diet_preference.clone(),
        diet_recommendations: diet_section(&input.diet_preference),
        goal_label: goal_label(&input.goal).to_string(),
        exercise_recommendations: exercise_section(&input.goal),
        general_tips: general_tips(input.age),
        weight_management_advice: weight_management_advice(bmi_category),
    }
}

/// Validate a raw record and compose its report.
///
/// Fails with `MissingInput` or `InvalidInput`; never yields a partial report.
pub fn compose_report_from_raw(raw: &RawInput) -> Result<HealthReport> {
    let input = HealthInput::try_from(raw)?;
    Ok(compose_report(&input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HealthError;
    use crate::models::{ActivityLevel, BloodType, BmiCategory, DietPreference, Gender, Goal};

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

    #[test]
    fn test_compose_is_deterministic() {
        let input = sample_input();
        assert_eq!(compose_report(&input), compose_report(&input));
    }

    #[test]
    fn test_goal_label_in_report() {
        let report = compose_report(&sample_input());
        assert_eq!(report.goal_label, "General Fitness");
    }

    #[test]
    fn test_underweight_has_no_advice() {
        let input = HealthInput {
            weight_kg: 50.0,
            ..sample_input()
        };
        let report = compose_report(&input);
        assert_eq!(report.bmi_category, BmiCategory::Underweight);
        assert!(report.weight_management_advice.is_none());
    }

    #[test]
    fn test_from_raw_missing() {
        let err = compose_report_from_raw(&RawInput::default()).unwrap_err();
        match err {
            HealthError::MissingInput(fields) => assert_eq!(fields.len(), 8),
            other => panic!("unexpected error: {other}"),
        }
    }
}
