use serde::{Deserialize, Deserializer};

use crate::error::{HealthError, Result};
use crate::models::profile::{ActivityLevel, BloodType, DietPreference, Gender, Goal};

/// Unvalidated input as collected from a form, JSON file, or CSV row.
///
/// Every field is optional here; `HealthInput::try_from` performs the
/// presence check and categorical parsing. Numeric cells that do not parse
/// as numbers are read as missing rather than failing the whole record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInput {
    #[serde(default, deserialize_with = "lenient_age")]
    pub age: Option<i64>,

    #[serde(default)]
    pub gender: Option<String>,

    #[serde(default, alias = "weight", deserialize_with = "lenient_number")]
    pub weight_kg: Option<f64>,

    #[serde(default, alias = "height", deserialize_with = "lenient_number")]
    pub height_cm: Option<f64>,

    #[serde(default)]
    pub blood_type: Option<String>,

    #[serde(default, alias = "activity")]
    pub activity_level: Option<String>,

    #[serde(default, alias = "diet")]
    pub diet_preference: Option<String>,

    #[serde(default)]
    pub goal: Option<String>,
}

/// Validated input record for the engine.
///
/// Numeric fields are only known to be present; their ranges are unchecked.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthInput {
    pub age: i64,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub blood_type: BloodType,
    pub activity_level: ActivityLevel,
    pub diet_preference: DietPreference,
    pub goal: Goal,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberCell {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl NumberCell {
    fn into_f64(self) -> Option<f64> {
        match self {
            NumberCell::Number(v) => Some(v),
            NumberCell::Text(s) => s.trim().parse().ok(),
            NumberCell::Other(_) => None,
        }
    }
}

fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let cell = Option::<NumberCell>::deserialize(deserializer)?;
    Ok(cell.and_then(NumberCell::into_f64))
}

// Fractional ages truncate toward zero.
fn lenient_age<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_number(deserializer)?.and_then(truncate_age))
}

/// Truncate a parsed age to whole years; non-finite values are missing.
pub fn truncate_age(value: f64) -> Option<i64> {
    value.is_finite().then(|| value.trunc() as i64)
}

fn present_text(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

// Zero and NaN count as missing, matching a falsy form value.
fn present_number(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan() && *v != 0.0)
}

fn present_age(value: Option<i64>) -> Option<i64> {
    value.filter(|a| *a != 0)
}

impl RawInput {
    /// Names of all required fields that are absent or empty.
    pub fn missing_fields(&self) -> Vec<String> {
        let checks = [
            ("age", present_age(self.age).is_some()),
            ("gender", present_text(&self.gender).is_some()),
            ("weightKg", present_number(self.weight_kg).is_some()),
            ("heightCm", present_number(self.height_cm).is_some()),
            ("bloodType", present_text(&self.blood_type).is_some()),
            ("activityLevel", present_text(&self.activity_level).is_some()),
            ("dietPreference", present_text(&self.diet_preference).is_some()),
            ("goal", present_text(&self.goal).is_some()),
        ];

        checks
            .into_iter()
            .filter(|(_, present)| !present)
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// True when every required field is present.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// The preset form used for demonstrations.
    pub fn sample() -> Self {
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
}

impl TryFrom<&RawInput> for HealthInput {
    type Error = HealthError;

    fn try_from(raw: &RawInput) -> Result<Self> {
        let (
            Some(age),
            Some(gender),
            Some(weight_kg),
            Some(height_cm),
            Some(blood_type),
            Some(activity_level),
            Some(diet_preference),
            Some(goal),
        ) = (
            present_age(raw.age),
            present_text(&raw.gender),
            present_number(raw.weight_kg),
            present_number(raw.height_cm),
            present_text(&raw.blood_type),
            present_text(&raw.activity_level),
            present_text(&raw.diet_preference),
            present_text(&raw.goal),
        )
        else {
            return Err(HealthError::MissingInput(raw.missing_fields()));
        };

        Ok(HealthInput {
            age,
            gender: gender.parse()?,
            weight_kg,
            height_cm,
            blood_type: blood_type.parse()?,
            activity_level: activity_level.parse()?,
            diet_preference: DietPreference::parse(diet_preference),
            goal: Goal::parse(goal),
        })
    }
}

impl TryFrom<RawInput> for HealthInput {
    type Error = HealthError;

    fn try_from(raw: RawInput) -> Result<Self> {
        HealthInput::try_from(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_raw() -> RawInput {
        RawInput::sample()
    }

    #[test]
    fn test_complete_raw_converts() {
        let input = HealthInput::try_from(complete_raw()).unwrap();
        assert_eq!(input.age, 30);
        assert_eq!(input.gender, Gender::Male);
        assert_eq!(input.blood_type, BloodType::OPositive);
        assert_eq!(input.activity_level, ActivityLevel::Moderate);
        assert_eq!(input.diet_preference, DietPreference::Balanced);
        assert_eq!(input.goal, Goal::Fitness);
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let raw = RawInput {
            gender: Some("   ".to_string()),
            weight_kg: Some(0.0),
            height_cm: Some(f64::NAN),
            goal: None,
            ..complete_raw()
        };

        match HealthInput::try_from(raw).unwrap_err() {
            HealthError::MissingInput(fields) => {
                assert_eq!(fields, vec!["gender", "weightKg", "heightCm", "goal"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_age_is_missing() {
        let raw = RawInput {
            age: Some(0),
            ..complete_raw()
        };
        assert_eq!(raw.missing_fields(), vec!["age"]);
        assert!(!raw.is_complete());
    }

    #[test]
    fn test_unknown_activity_is_invalid() {
        let raw = RawInput {
            activity_level: Some("extreme".to_string()),
            ..complete_raw()
        };
        assert!(matches!(
            HealthInput::try_from(raw),
            Err(HealthError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_unknown_diet_is_kept() {
        let raw = RawInput {
            diet_preference: Some("carnivore".to_string()),
            ..complete_raw()
        };
        let input = HealthInput::try_from(raw).unwrap();
        assert_eq!(
            input.diet_preference,
            DietPreference::Other("carnivore".to_string())
        );
    }

    #[test]
    fn test_deserialize_form_aliases() {
        let json = r#"{
            "age": 41, "gender": "female", "weight": 60, "height": 165,
            "bloodType": "A-", "activity": "light", "diet": "vegan", "goal": "maintain"
        }"#;
        let raw: RawInput = serde_json::from_str(json).unwrap();
        assert!(raw.is_complete());
        assert_eq!(raw.weight_kg, Some(60.0));
        assert_eq!(raw.activity_level.as_deref(), Some("light"));
    }

    #[test]
    fn test_negative_and_fractional_ages_pass_through() {
        let json = r#"{
            "age": -5, "gender": "male", "weightKg": 75, "heightCm": 175,
            "bloodType": "O+", "activityLevel": "moderate", "dietPreference": "balanced", "goal": "fitness"
        }"#;
        let raw: RawInput = serde_json::from_str(json).unwrap();
        assert_eq!(HealthInput::try_from(raw).unwrap().age, -5);

        let raw: RawInput = serde_json::from_str(r#"{"age": 30.9}"#).unwrap();
        assert_eq!(raw.age, Some(30));

        let raw: RawInput = serde_json::from_str(r#"{"age": "41"}"#).unwrap();
        assert_eq!(raw.age, Some(41));
    }

    #[test]
    fn test_unparsable_numbers_are_missing() {
        let json = r#"{"age": "old", "weightKg": "abc", "heightCm": null, "gender": "male"}"#;
        let raw: RawInput = serde_json::from_str(json).unwrap();
        assert_eq!(raw.age, None);
        assert_eq!(raw.weight_kg, None);
        assert_eq!(raw.height_cm, None);
        assert_eq!(
            raw.missing_fields()[..3],
            ["age".to_string(), "weightKg".to_string(), "heightCm".to_string()]
        );
    }

    #[test]
    fn test_sample_is_complete() {
        let input = HealthInput::try_from(RawInput::sample()).unwrap();
        assert_eq!(input.blood_type, BloodType::OPositive);
        assert_eq!(input.goal, Goal::Fitness);
    }
}
