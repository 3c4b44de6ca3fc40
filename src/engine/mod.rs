pub mod calculations;
pub mod constants;
pub mod recommendations;
pub mod report;

pub use calculations::{
    classify_bmi, compute_bmi, compute_bmr, compute_daily_calories, compute_ideal_weight_range,
    daily_calories_for, round_half_up,
};
pub use constants::*;
pub use recommendations::{
    diet_section, exercise_section, general_tips, lookup_blood_profile, lookup_blood_profile_str,
    lookup_diet_recommendations, lookup_exercise_recommendations, weight_management_advice,
};
pub use report::{compose_report, compose_report_from_raw};
