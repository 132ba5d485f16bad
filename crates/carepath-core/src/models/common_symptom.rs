use serde::Serialize;
use ts_rs::TS;

/// An entry in the picker catalog shown before a chat starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct CommonSymptom {
    pub name: &'static str,
    pub category: SymptomCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SymptomCategory {
    General,
    Respiratory,
    Neurological,
    Musculoskeletal,
    Gastrointestinal,
    Cardiovascular,
    Dermatological,
    Sensory,
}
