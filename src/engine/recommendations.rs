use tracing::warn;

use crate::engine::constants::{
    blood_profile, diet_suggestions, exercise_plan, DIET_FIXED_TIPS, EXERCISE_FIXED_TIPS,
    GENERAL_TIPS, HABITS_TIP, SCREENING_AGE, SCREENING_TIP, WEIGHT_MANAGEMENT_ADVICE,
};
use crate::error::Result;
use crate::models::{BloodProfile, BloodType, BmiCategory, DietPreference, Goal};

/// Profile for a blood type.
pub fn lookup_blood_profile(blood_type: BloodType) -> &'static BloodProfile {
    blood_profile(blood_type)
}

/// Profile for a blood type given by name; unknown names are an error.
pub fn lookup_blood_profile_str(blood_type: &str) -> Result<&'static BloodProfile> {
    let bt: BloodType = blood_type.parse()?;
    Ok(blood_profile(bt))
}

/// Food categories for a diet preference (empty when unknown).
pub fn lookup_diet_recommendations(diet: &DietPreference) -> &'static [&'static str] {
    let items = diet_suggestions(diet);
    if items.is_empty() {
        warn!(diet = %diet, "no diet suggestions for preference");
    }
    items
}

/// Exercise plan for a goal (empty when unknown).
pub fn lookup_exercise_recommendations(goal: &Goal) -> &'static [&'static str] {
    let items = exercise_plan(goal);
    if items.is_empty() {
        warn!(goal = %goal, "no exercise plan for goal");
    }
    items
}

/// Diet suggestions followed by the fixed hydration and processed-food lines.
pub fn diet_section(diet: &DietPreference) -> Vec<String> {
    lookup_diet_recommendations(diet)
        .iter()
        .chain(DIET_FIXED_TIPS.iter())
        .map(|s| s.to_string())
        .collect()
}

/// Exercise plan followed by the fixed warm-up and rest lines.
pub fn exercise_section(goal: &Goal) -> Vec<String> {
    lookup_exercise_recommendations(goal)
        .iter()
        .chain(EXERCISE_FIXED_TIPS.iter())
        .map(|s| s.to_string())
        .collect()
}

/// Sleep, stress and check-up tips plus one age-dependent tip.
pub fn general_tips(age: i64) -> Vec<String> {
    let age_tip = if age > SCREENING_AGE {
        SCREENING_TIP
    } else {
        HABITS_TIP
    };

    GENERAL_TIPS
        .iter()
        .copied()
        .chain(std::iter::once(age_tip))
        .map(String::from)
        .collect()
}

/// Weight management advisory, only for Overweight and Obese.
pub fn weight_management_advice(category: BmiCategory) -> Option<Vec<String>> {
    category
        .needs_weight_management()
        .then(|| WEIGHT_MANAGEMENT_ADVICE.iter().map(|s| s.to_string()).collect())
}
