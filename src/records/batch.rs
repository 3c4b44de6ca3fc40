use std::path::Path;

use tracing::{info, warn};

use crate::engine::compose_report_from_raw;
use crate::error::Result;
use crate::models::HealthReport;
use crate::records::persistence::CsvRecord;

/// Outcome of one batch row: a report or the reason it failed.
#[derive(Debug)]
pub struct BatchRow {
    /// 1-based row number in the input file.
    pub row: usize,
    pub outcome: std::result::Result<HealthReport, String>,
}

/// Compute a report for every record; failures are kept per row.
pub fn run_batch(records: &[CsvRecord]) -> Vec<BatchRow> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let outcome = match record {
                Ok(raw) => compose_report_from_raw(raw).map_err(|e| {
                    warn!(row = i + 1, error = %e, "skipping invalid record");
                    e.to_string()
                }),
                Err(message) => Err(message.clone()),
            };
            BatchRow { row: i + 1, outcome }
        })
        .collect()
}

/// Write one summary row per batch result.
pub fn write_summary_csv(rows: &[BatchRow], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "row",
        "bmi",
        "bmiCategory",
        "bmr",
        "dailyCalories",
        "idealMinKg",
        "idealMaxKg",
        "error",
    ])?;

    for row in rows {
        match &row.outcome {
            Ok(report) => wtr.write_record([
                row.row.to_string(),
                format!("{:.2}", report.bmi),
                report.bmi_category.to_string(),
                format!("{:.2}", report.bmr),
                report.daily_calories.to_string(),
                report.ideal_weight_range_kg.min_kg.to_string(),
                report.ideal_weight_range_kg.max_kg.to_string(),
                String::new(),
            ])?,
            Err(message) => wtr.write_record([
                row.row.to_string(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                message.clone(),
            ])?,
        }
    }

    wtr.flush()?;
    info!(path = %path.display(), rows = rows.len(), "wrote batch summary");
    Ok(())
}
