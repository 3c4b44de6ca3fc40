use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::models::{HealthReport, RawInput};

/// Load a single raw input record from a JSON file.
pub fn load_input<P: AsRef<Path>>(path: P) -> Result<RawInput> {
    let content = fs::read_to_string(path.as_ref())?;
    let raw: RawInput = serde_json::from_str(&content)?;
    info!(path = %path.as_ref().display(), "loaded input record");
    Ok(raw)
}

/// One CSV row: the parsed record, or why the row could not be read.
pub type CsvRecord = std::result::Result<RawInput, String>;

/// Load raw input records from a CSV file with a header row.
///
/// Empty or non-numeric cells deserialize as missing fields. A row that
/// cannot be read at all (e.g. a wrong number of cells) is kept as an error
/// so the remaining rows still load; only I/O failures abort.
pub fn load_inputs_csv<P: AsRef<Path>>(path: P) -> Result<Vec<CsvRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let mut records = Vec::new();
    for row in rdr.deserialize::<RawInput>() {
        match row {
            Ok(raw) => records.push(Ok(raw)),
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e.into()),
            Err(e) => {
                warn!(error = %e, "unreadable CSV row");
                records.push(Err(format!("Unreadable row: {}", e)));
            }
        }
    }

    info!(
        path = %path.as_ref().display(),
        count = records.len(),
        "loaded input records"
    );
    Ok(records)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportDocument<'a> {
    generated_at: &'a DateTime<Local>,
    report: &'a HealthReport,
}

/// Render a report as a pretty JSON document with its generation time.
pub fn report_to_json(report: &HealthReport, generated_at: &DateTime<Local>) -> Result<String> {
    let doc = ReportDocument {
        generated_at,
        report,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Save a report as a JSON document.
pub fn save_report<P: AsRef<Path>>(
    path: P,
    report: &HealthReport,
    generated_at: &DateTime<Local>,
) -> Result<()> {
    let json = report_to_json(report, generated_at)?;
    fs::write(path.as_ref(), json)?;
    info!(path = %path.as_ref().display(), "saved report");
    Ok(())
}
