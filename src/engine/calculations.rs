use crate::engine::constants::*;
use crate::error::Result;
use crate::models::{ActivityLevel, BmiCategory, Gender, IdealWeightRange};

/// Round half up, like JavaScript's `Math.round`.
///
/// Identical to `f64::round` for positive values; `-2.5` rounds to `-2`.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Body Mass Index: weight(kg) / height(m)².
///
/// The caller must ensure `height_cm > 0`.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify a BMI value. Boundary values fall into the higher band.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < BMI_NORMAL_MIN {
        BmiCategory::Underweight
    } else if bmi < BMI_OVERWEIGHT_MIN {
        BmiCategory::Normal
    } else if bmi < BMI_OBESE_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Basal Metabolic Rate using the Mifflin-St Jeor equation.
///
/// Men: 10w + 6.25h - 5a + 5
/// Women: 10w + 6.25h - 5a - 161
pub fn compute_bmr(weight_kg: f64, height_cm: f64, age: i64, gender: Gender) -> f64 {
    let base = BMR_WEIGHT_COEF * weight_kg + BMR_HEIGHT_COEF * height_cm
        - BMR_AGE_COEF * age as f64;
    match gender {
        Gender::Male => base + BMR_MALE_CONSTANT,
        Gender::Female => base + BMR_FEMALE_CONSTANT,
    }
}

/// Daily calorie needs: BMR scaled by the activity multiplier, rounded.
pub fn compute_daily_calories(bmr: f64, activity: ActivityLevel) -> i64 {
    round_half_up(bmr * activity_multiplier(activity))
}

/// Daily calorie needs for an activity level given by name.
///
/// An unrecognized level is an error rather than a silent default.
pub fn daily_calories_for(bmr: f64, activity: &str) -> Result<i64> {
    let level: ActivityLevel = activity.parse()?;
    Ok(compute_daily_calories(bmr, level))
}

/// Ideal weight range in whole kilograms for BMI 18.5 to 24.9.
pub fn compute_ideal_weight_range(height_cm: f64) -> IdealWeightRange {
    let height_m = height_cm / 100.0;
    let height_m_sq = height_m * height_m;
    IdealWeightRange {
        min_kg: round_half_up(IDEAL_BMI_MIN * height_m_sq),
        max_kg: round_half_up(IDEAL_BMI_MAX * height_m_sq),
    }
}
