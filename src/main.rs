use std::path::Path;

use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use health_report_rs::cli::{Cli, Command};
use health_report_rs::engine::compose_report_from_raw;
use health_report_rs::error::{HealthError, Result};
use health_report_rs::models::{HealthReport, RawInput};
use health_report_rs::interface::{
    collect_health_form, display_missing_fields, display_report, prompt_yes_no,
};
use health_report_rs::records::{
    load_input, load_inputs_csv, report_to_json, run_batch, save_report, write_summary_csv,
};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or_default() {
        Command::Report => cmd_report(),
        Command::Compute {
            input,
            json,
            output,
        } => cmd_compute(&input, json, output.as_deref()),
        Command::Sample { json, output } => cmd_sample(json, output.as_deref()),
        Command::Batch { input, output } => cmd_batch(&input, &output),
    }
}

/// Collect the form interactively and print the report.
fn cmd_report() -> Result<()> {
    loop {
        let raw = collect_health_form()?;

        match compose_report_from_raw(&raw) {
            Ok(report) => {
                display_report(&report);
                return Ok(());
            }
            Err(HealthError::MissingInput(fields)) => {
                display_missing_fields(&fields);
                if !prompt_yes_no("Fill in the form again?", true)? {
                    return Ok(());
                }
            }
            Err(e) => return Err(e),
        }
    }
}

/// Compute a report from a JSON input file.
fn cmd_compute(input: &Path, json: bool, output: Option<&Path>) -> Result<()> {
    let raw = load_input(input)?;
    let report = compose_report_from_raw(&raw)?;
    emit_report(&report, json, output)
}

/// Compute the report for the preset sample profile.
fn cmd_sample(json: bool, output: Option<&Path>) -> Result<()> {
    let report = compose_report_from_raw(&RawInput::sample())?;
    emit_report(&report, json, output)
}

fn emit_report(report: &HealthReport, json: bool, output: Option<&Path>) -> Result<()> {
    let generated_at = Local::now();

    if json {
        println!("{}", report_to_json(report, &generated_at)?);
    } else {
        display_report(report);
    }

    if let Some(path) = output {
        save_report(path, report, &generated_at)?;
        println!("Report saved to {}", path.display());
    }

    Ok(())
}

/// Compute a summary row for every record of a CSV file.
fn cmd_batch(input: &Path, output: &Path) -> Result<()> {
    let records = load_inputs_csv(input)?;
    if records.is_empty() {
        println!("No records found in {}", input.display());
        return Ok(());
    }

    let rows = run_batch(&records);
    let failed = rows.iter().filter(|r| r.outcome.is_err()).count();

    write_summary_csv(&rows, output)?;

    println!(
        "Processed {} records ({} failed). Summary written to {}",
        rows.len(),
        failed,
        output.display()
    );
    Ok(())
}
