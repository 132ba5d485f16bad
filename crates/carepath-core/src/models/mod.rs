pub mod appointment;
pub mod common_symptom;
pub mod conversation;
pub mod facility;
pub mod profile;
pub mod severity;
pub mod symptom_check;
pub mod triage;
