use chrono::{DateTime, Local};

use crate::engine::constants::bmi_style_tag;
use crate::engine::round_half_up;
use crate::models::HealthReport;

/// Format a report as the plain-text results card.
pub fn format_report(report: &HealthReport, generated_at: &DateTime<Local>) -> String {
    let mut out = Vec::new();
    let range = report.ideal_weight_range_kg;

    out.push(String::new());
    out.push("=== Health Report ===".to_string());
    out.push(format!("Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S")));
    out.push(String::new());

    out.push(format!(
        "  BMI           {:>7.1}  {} [{}]",
        report.bmi,
        report.bmi_category,
        bmi_style_tag(report.bmi_category)
    ));
    out.push(format!(
        "  BMR           {:>7}  Calories/day at rest",
        round_half_up(report.bmr)
    ));
    out.push(format!(
        "  Daily Needs   {:>7}  Calories for {} activity",
        report.daily_calories, report.activity_level
    ));
    out.push(format!(
        "  Ideal Weight  {:>7}  Kilograms (range)",
        format!("{}-{}", range.min_kg, range.max_kg)
    ));
    out.push(String::new());

    let profile = &report.blood_profile;
    let compatible: Vec<String> = profile
        .donation_compatibility
        .iter()
        .map(|c| c.to_string())
        .collect();
    out.push(format!("--- Blood Type {} Profile ---", report.blood_type));
    out.push(format!("Common Traits: {}", profile.traits.join(", ")));
    out.push(format!("Diet Tip: {}", profile.diet_tip));
    out.push(format!("Compatible for donation: {}", compatible.join(", ")));
    out.push(report.blood_type_disclaimer.to_string());
    out.push(String::new());

    push_section(
        &mut out,
        &format!("Diet Suggestions ({})", report.diet_preference),
        &report.diet_recommendations,
    );
    push_section(
        &mut out,
        &format!("Exercise Plan ({})", report.goal_label),
        &report.exercise_recommendations,
    );
    push_section(&mut out, "General Health Tips", &report.general_tips);

    if let Some(advice) = &report.weight_management_advice {
        push_section(&mut out, "Weight Management", advice);
    }

    out.join("\n")
}

fn push_section(out: &mut Vec<String>, title: &str, items: &[String]) {
    out.push(format!("--- {} ---", title));
    for item in items {
        out.push(format!("  - {}", item));
    }
    out.push(String::new());
}

/// Print a report with a freshly generated timestamp.
pub fn display_report(report: &HealthReport) {
    println!("{}", format_report(report, &Local::now()));
}

/// Print the notice shown when the form is incomplete.
pub fn display_missing_fields(fields: &[String]) {
    println!("Please fill all fields");
    println!("Missing: {}", fields.join(", "));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::engine::compose_report;
    use crate::models::{
        ActivityLevel, BloodType, DietPreference, Gender, Goal, HealthInput,
    };

    fn sample_report(weight_kg: f64) -> HealthReport {
        compose_report(&HealthInput {
            age: 45,
            gender: Gender::Female,
            weight_kg,
            height_cm: 165.0,
            blood_type: BloodType::AbPositive,
            activity_level: ActivityLevel::Light,
            diet_preference: DietPreference::Vegan,
            goal: Goal::Lose,
        })
    }

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_format_contains_sections() {
        let text = format_report(&sample_report(60.0), &fixed_time());
        assert!(text.contains("Generated: 2024-03-01 09:30:00"));
        assert!(text.contains("[bmi-normal]"));
        assert!(text.contains("Calories for light activity"));
        assert!(text.contains("--- Blood Type AB+ Profile ---"));
        assert!(text.contains("Compatible for donation: All blood types"));
        assert!(text.contains("--- Diet Suggestions (vegan) ---"));
        assert!(text.contains("--- Exercise Plan (Weight Loss) ---"));
        assert!(text.contains("Consider regular cardiovascular screening"));
        assert!(!text.contains("Weight Management"));
    }

    #[test]
    fn test_format_includes_weight_management() {
        let text = format_report(&sample_report(95.0), &fixed_time());
        assert!(text.contains("[bmi-obese]"));
        assert!(text.contains("--- Weight Management ---"));
        assert!(text.contains("  - Focus on portion control and mindful eating"));
    }
}
