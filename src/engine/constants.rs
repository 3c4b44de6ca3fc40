use crate::models::{
    ActivityLevel, BloodProfile, BloodType, BmiCategory, Compatibility, DietPreference, Goal,
};

use BloodType::*;

// ─────────────────────────────────────────────────────────────────────────────
// BMI bands
// ─────────────────────────────────────────────────────────────────────────────

/// Lower bound of the Normal band.
pub const BMI_NORMAL_MIN: f64 = 18.5;

/// Lower bound of the Overweight band.
pub const BMI_OVERWEIGHT_MIN: f64 = 25.0;

/// Lower bound of the Obese band.
pub const BMI_OBESE_MIN: f64 = 30.0;

/// BMI bounds used for the ideal weight range.
pub const IDEAL_BMI_MIN: f64 = 18.5;
pub const IDEAL_BMI_MAX: f64 = 24.9;

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor coefficients
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_WEIGHT_COEF: f64 = 10.0;
pub const BMR_HEIGHT_COEF: f64 = 6.25;
pub const BMR_AGE_COEF: f64 = 5.0;
pub const BMR_MALE_CONSTANT: f64 = 5.0;
pub const BMR_FEMALE_CONSTANT: f64 = -161.0;

/// Age above which the cardiovascular screening tip is shown.
pub const SCREENING_AGE: i64 = 40;

// ─────────────────────────────────────────────────────────────────────────────
// Fixed advisory lines
// ─────────────────────────────────────────────────────────────────────────────

pub const DIET_FIXED_TIPS: [&str; 2] = [
    "Stay hydrated with 8-10 glasses of water daily",
    "Limit processed foods and added sugars",
];

pub const EXERCISE_FIXED_TIPS: [&str; 2] = [
    "Always warm up for 5-10 minutes before exercise",
    "Listen to your body and rest when needed",
];

pub const GENERAL_TIPS: [&str; 3] = [
    "Sleep 7-9 hours per night for optimal recovery",
    "Manage stress through meditation or mindfulness",
    "Get regular health check-ups based on your age",
];

pub const SCREENING_TIP: &str = "Consider regular cardiovascular screening";
pub const HABITS_TIP: &str = "Maintain these healthy habits as you age";

pub const WEIGHT_MANAGEMENT_ADVICE: [&str; 3] = [
    "Aim to lose 0.5-1 kg per week for sustainable results",
    "Create a calorie deficit of 500-750 calories daily",
    "Focus on portion control and mindful eating",
];

pub const BLOOD_TYPE_DISCLAIMER: &str =
    "Note: Blood type personality/diet theories are not scientifically proven.";

// ─────────────────────────────────────────────────────────────────────────────
// Lookup tables
// ─────────────────────────────────────────────────────────────────────────────

/// Multiplier from BMR to total daily energy expenditure.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::Athlete => 1.9,
    }
}

static A_POS: BloodProfile = BloodProfile {
    traits: &["Methodical", "Cooperative", "Orderly"],
    diet_tip: "May respond well to vegetarian diet with fish occasionally",
    donation_compatibility: &[
        Compatibility::Type(APositive),
        Compatibility::Type(ANegative),
        Compatibility::Type(OPositive),
        Compatibility::Type(ONegative),
    ],
};

static A_NEG: BloodProfile = BloodProfile {
    traits: &["Creative", "Sensitive", "Perfectionist"],
    diet_tip: "Consider plant-based foods with lean protein",
    donation_compatibility: &[Compatibility::Type(ANegative), Compatibility::Type(ONegative)],
};

static B_POS: BloodProfile = BloodProfile {
    traits: &["Flexible", "Creative", "Individualistic"],
    diet_tip: "Balanced omnivore diet often works well",
    donation_compatibility: &[
        Compatibility::Type(BPositive),
        Compatibility::Type(BNegative),
        Compatibility::Type(OPositive),
        Compatibility::Type(ONegative),
    ],
};

static B_NEG: BloodProfile = BloodProfile {
    traits: &["Independent", "Strong-minded", "Practical"],
    diet_tip: "Can handle dairy better than some blood types",
    donation_compatibility: &[Compatibility::Type(BNegative), Compatibility::Type(ONegative)],
};

static AB_POS: BloodProfile = BloodProfile {
    traits: &["Rational", "Calm", "Adaptable"],
    diet_tip: "Most flexible diet - mix of A and B type recommendations",
    donation_compatibility: &[Compatibility::All],
};

static AB_NEG: BloodProfile = BloodProfile {
    traits: &["Charismatic", "Spiritual", "Complex"],
    diet_tip: "Moderate portions of varied foods work best",
    donation_compatibility: &[
        Compatibility::Type(AbNegative),
        Compatibility::Type(ANegative),
        Compatibility::Type(BNegative),
        Compatibility::Type(ONegative),
    ],
};

static O_POS: BloodProfile = BloodProfile {
    traits: &["Confident", "Strong leadership", "Energetic"],
    diet_tip: "High-protein diet with lean meats often suitable",
    donation_compatibility: &[Compatibility::Type(OPositive), Compatibility::Type(ONegative)],
};

static O_NEG: BloodProfile = BloodProfile {
    traits: &["Robust", "Focused", "Natural leaders"],
    diet_tip: "Lean proteins and vegetables work well",
    donation_compatibility: &[Compatibility::Type(ONegative)],
};

/// Blood type profile table.
pub fn blood_profile(blood_type: BloodType) -> &'static BloodProfile {
    match blood_type {
        APositive => &A_POS,
        ANegative => &A_NEG,
        BPositive => &B_POS,
        BNegative => &B_NEG,
        AbPositive => &AB_POS,
        AbNegative => &AB_NEG,
        OPositive => &O_POS,
        ONegative => &O_NEG,
    }
}

/// Food categories per diet preference. Unknown preferences have none.
pub fn diet_suggestions(diet: &DietPreference) -> &'static [&'static str] {
    match diet {
        DietPreference::Balanced => &[
            "Whole grains",
            "Lean proteins",
            "Fruits & vegetables",
            "Healthy fats",
        ],
        DietPreference::Vegetarian => &[
            "Legumes",
            "Tofu/Tempeh",
            "Nuts & seeds",
            "Dairy/Eggs",
            "Whole grains",
        ],
        DietPreference::Vegan => &[
            "Legumes",
            "Tofu/Tempeh",
            "Nuts & seeds",
            "Whole grains",
            "Fortified plant milk",
        ],
        DietPreference::Keto => &[
            "Healthy fats",
            "Non-starchy vegetables",
            "Protein in moderation",
            "Low-carb fruits",
        ],
        DietPreference::Mediterranean => &[
            "Olive oil",
            "Fish",
            "Whole grains",
            "Vegetables",
            "Nuts",
        ],
        DietPreference::Pescatarian => &[
            "Fish & seafood",
            "Plant proteins",
            "Dairy",
            "Whole grains",
            "Vegetables",
        ],
        DietPreference::Other(_) => &[],
    }
}

/// Exercise plan per goal. Unknown goals have none.
pub fn exercise_plan(goal: &Goal) -> &'static [&'static str] {
    match goal {
        Goal::Lose => &[
            "Cardio 4-5x/week (30-45 min)",
            "Strength training 3x/week",
            "HIIT workouts 2x/week",
        ],
        Goal::Maintain => &[
            "Cardio 3-4x/week",
            "Strength training 2-3x/week",
            "Flexibility exercises",
        ],
        Goal::Gain => &[
            "Strength training 4-5x/week",
            "Compound movements",
            "Adequate rest between sessions",
        ],
        Goal::Fitness => &[
            "Varied workouts",
            "Progressive overload",
            "Include recovery days",
        ],
        Goal::Other(_) => &[],
    }
}

/// Display name for a goal; unknown goals display as entered.
pub fn goal_label(goal: &Goal) -> &str {
    match goal {
        Goal::Lose => "Weight Loss",
        Goal::Maintain => "Weight Maintenance",
        Goal::Gain => "Muscle Gain",
        Goal::Fitness => "General Fitness",
        Goal::Other(raw) => raw,
    }
}

/// Presentation style tag for a BMI category.
pub fn bmi_style_tag(category: BmiCategory) -> &'static str {
    match category {
        BmiCategory::Underweight => "bmi-underweight",
        BmiCategory::Normal => "bmi-normal",
        BmiCategory::Overweight => "bmi-overweight",
        BmiCategory::Obese => "bmi-obese",
    }
}
