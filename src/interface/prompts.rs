use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::models::input::truncate_age;
use crate::models::{ActivityLevel, BloodType, DietPreference, Gender, Goal, RawInput};

/// Prompt for a free-text number.
///
/// Anything that does not parse as a number is treated as left blank.
pub fn prompt_number(prompt: &str) -> Result<Option<f64>> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;

    Ok(input.trim().parse().ok())
}

/// Prompt for age; fractional answers truncate to whole years.
pub fn prompt_age() -> Result<Option<i64>> {
    Ok(prompt_number("Age (years)")?.and_then(truncate_age))
}

/// Prompt the user to pick one option from a fixed list.
pub fn prompt_choice(prompt: &str, options: &[&str]) -> Result<String> {
    let selection = Select::new()
        .with_prompt(prompt)
        .items(options)
        .default(0)
        .interact()?;

    Ok(options[selection].to_string())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect every field of the health form.
pub fn collect_health_form() -> Result<RawInput> {
    let genders: Vec<&str> = Gender::ALL.iter().map(|g| g.as_str()).collect();
    let blood_types: Vec<&str> = BloodType::ALL.iter().map(|b| b.as_str()).collect();
    let activities: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.as_str()).collect();
    let known_diets = DietPreference::KNOWN;
    let diets: Vec<&str> = known_diets.iter().map(|d| d.as_str()).collect();
    let known_goals = Goal::KNOWN;
    let goals: Vec<&str> = known_goals.iter().map(|g| g.as_str()).collect();

    let age = prompt_age()?;
    let gender = prompt_choice("Gender", &genders)?;
    let weight_kg = prompt_number("Weight (kg)")?;
    let height_cm = prompt_number("Height (cm)")?;
    let blood_type = prompt_choice("Blood type", &blood_types)?;
    let activity_level = prompt_choice("Activity level", &activities)?;
    let diet_preference = prompt_choice("Diet preference", &diets)?;
    let goal = prompt_choice("Goal", &goals)?;

    Ok(RawInput {
        age,
        gender: Some(gender),
        weight_kg,
        height_cm,
        blood_type: Some(blood_type),
        activity_level: Some(activity_level),
        diet_preference: Some(diet_preference),
        goal: Some(goal),
    })
}
