pub mod input;
pub mod profile;
pub mod report;

pub use input::{HealthInput, RawInput};
pub use profile::{ActivityLevel, BloodType, DietPreference, Gender, Goal};
pub use report::{BloodProfile, BmiCategory, Compatibility, HealthReport, IdealWeightRange};
