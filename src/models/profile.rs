use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use strsim::jaro_winkler;

use crate::error::{HealthError, Result};

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Find the option closest to `input`, if any is similar enough.
pub fn closest_match<'a>(input: &str, options: &[&'a str]) -> Option<&'a str> {
    let input = input.to_lowercase();
    options
        .iter()
        .map(|o| (*o, jaro_winkler(&o.to_lowercase(), &input)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(o, _)| o)
}

/// Parse a categorical value against a closed set of choices.
///
/// Matching is case-insensitive on the trimmed input. On failure the error
/// names the field and, when possible, the nearest valid value.
fn parse_choice<T: Copy>(field: &str, input: &str, all: &[T], name: fn(T) -> &'static str) -> Result<T> {
    let trimmed = input.trim();
    if let Some(found) = all
        .iter()
        .find(|c| name(**c).eq_ignore_ascii_case(trimmed))
    {
        return Ok(*found);
    }

    let names: Vec<&str> = all.iter().map(|c| name(*c)).collect();
    let message = match closest_match(trimmed, &names) {
        Some(suggestion) => format!(
            "unknown {} '{}' (did you mean '{}'?)",
            field, trimmed, suggestion
        ),
        None => format!(
            "unknown {} '{}' (expected one of: {})",
            field,
            trimmed,
            names.join(", ")
        ),
    };
    Err(HealthError::InvalidInput(message))
}

/// Sex used by the BMR formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = HealthError;

    fn from_str(s: &str) -> Result<Self> {
        parse_choice("gender", s, &Gender::ALL, Gender::as_str)
    }
}

/// ABO blood group with Rh factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BloodType {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodType {
    pub const ALL: [BloodType; 8] = [
        BloodType::APositive,
        BloodType::ANegative,
        BloodType::BPositive,
        BloodType::BNegative,
        BloodType::AbPositive,
        BloodType::AbNegative,
        BloodType::OPositive,
        BloodType::ONegative,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BloodType::APositive => "A+",
            BloodType::ANegative => "A-",
            BloodType::BPositive => "B+",
            BloodType::BNegative => "B-",
            BloodType::AbPositive => "AB+",
            BloodType::AbNegative => "AB-",
            BloodType::OPositive => "O+",
            BloodType::ONegative => "O-",
        }
    }
}

impl FromStr for BloodType {
    type Err = HealthError;

    fn from_str(s: &str) -> Result<Self> {
        parse_choice("blood type", s, &BloodType::ALL, BloodType::as_str)
    }
}

/// Weekly activity level, used to scale BMR into daily needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    Athlete,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::Athlete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::Athlete => "athlete",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = HealthError;

    fn from_str(s: &str) -> Result<Self> {
        parse_choice("activity level", s, &ActivityLevel::ALL, ActivityLevel::as_str)
    }
}

/// Dietary preference.
///
/// Unrecognized values are kept as `Other` rather than rejected; their
/// suggestion list is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DietPreference {
    Balanced,
    Vegetarian,
    Vegan,
    Keto,
    Mediterranean,
    Pescatarian,
    Other(String),
}

impl DietPreference {
    pub const KNOWN: [DietPreference; 6] = [
        DietPreference::Balanced,
        DietPreference::Vegetarian,
        DietPreference::Vegan,
        DietPreference::Keto,
        DietPreference::Mediterranean,
        DietPreference::Pescatarian,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            DietPreference::Balanced => "balanced",
            DietPreference::Vegetarian => "vegetarian",
            DietPreference::Vegan => "vegan",
            DietPreference::Keto => "keto",
            DietPreference::Mediterranean => "mediterranean",
            DietPreference::Pescatarian => "pescatarian",
            DietPreference::Other(raw) => raw,
        }
    }

    /// Lenient parse: never fails.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        DietPreference::KNOWN
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| DietPreference::Other(trimmed.to_string()))
    }
}

impl Serialize for DietPreference {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Fitness goal. Unrecognized values are kept as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
    Fitness,
    Other(String),
}

impl Goal {
    pub const KNOWN: [Goal; 4] = [Goal::Lose, Goal::Maintain, Goal::Gain, Goal::Fitness];

    pub fn as_str(&self) -> &str {
        match self {
            Goal::Lose => "lose",
            Goal::Maintain => "maintain",
            Goal::Gain => "gain",
            Goal::Fitness => "fitness",
            Goal::Other(raw) => raw,
        }
    }

    /// Lenient parse: never fails.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        Goal::KNOWN
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| Goal::Other(trimmed.to_string()))
    }
}

impl Serialize for Goal {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

impl_display!(Gender, BloodType, ActivityLevel, DietPreference, Goal);
