use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Health Report — BMI, BMR, daily calories, and personalized recommendations.
#[derive(Parser, Debug)]
#[command(name = "health_report")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log filter (e.g. "debug" or "health_report_rs=trace").
    #[arg(long, env = "HEALTH_REPORT_LOG", default_value = "warn", global = true)]
    pub log_level: String,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Fill in the health form interactively and print the report.
    #[default]
    Report,

    /// Compute a report from a JSON input record.
    Compute {
        /// Path to the input JSON file.
        #[arg(short, long)]
        input: PathBuf,

        /// Print the report as JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Also save the report as a JSON document.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the report for the built-in sample profile.
    Sample {
        /// Print the report as JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Also save the report as a JSON document.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compute reports for every row of a CSV file.
    Batch {
        /// Path to the input CSV file.
        #[arg(short, long)]
        input: PathBuf,

        /// Path of the summary CSV to write.
        #[arg(short, long, default_value = "health_summary.csv")]
        output: PathBuf,
    },
}
