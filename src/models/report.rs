use std::fmt;

use serde::{Serialize, Serializer};

use crate::models::profile::{ActivityLevel, BloodType, DietPreference};

/// BMI classification band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Whether the weight management advisory applies.
    pub fn needs_weight_management(self) -> bool {
        matches!(self, BmiCategory::Overweight | BmiCategory::Obese)
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in a blood type's donation compatibility list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compatibility {
    Type(BloodType),
    All,
}

impl Serialize for Compatibility {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Compatibility::Type(bt) => serializer.serialize_str(bt.as_str()),
            Compatibility::All => serializer.serialize_str("all"),
        }
    }
}

impl fmt::Display for Compatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compatibility::Type(bt) => f.write_str(bt.as_str()),
            Compatibility::All => f.write_str("All blood types"),
        }
    }
}

/// Informational profile for a blood type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodProfile {
    pub traits: &'static [&'static str],
    pub diet_tip: &'static str,
    pub donation_compatibility: &'static [Compatibility],
}

/// Weight bounds in whole kilograms for BMI 18.5 to 24.9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdealWeightRange {
    pub min_kg: i64,
    pub max_kg: i64,
}

/// Complete output of the engine for one input record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmr: f64,
    pub daily_calories: i64,
    pub activity_level: ActivityLevel,
    pub ideal_weight_range_kg: IdealWeightRange,

    pub blood_type: BloodType,
    pub blood_profile: BloodProfile,
    pub blood_type_disclaimer: &'static str,

    pub diet_preference: DietPreference,
    pub diet_recommendations: Vec<String>,

    pub goal_label: String,
    pub exercise_recommendations: Vec<String>,

    pub general_tips: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_management_advice: Option<Vec<String>>,
}
