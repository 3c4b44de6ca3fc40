pub mod prompts;
pub mod render;

pub use prompts::{collect_health_form, prompt_choice, prompt_number, prompt_yes_no};
pub use render::{display_missing_fields, display_report, format_report};
