mod batch;
mod persistence;

pub use batch::{run_batch, write_summary_csv, BatchRow};
pub use persistence::{load_input, load_inputs_csv, report_to_json, save_report, CsvRecord};
