use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::severity::Severity;

/// The classifier's output for one completed assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TriageResult {
    pub severity: Severity,
    pub urgency_level: u8,
    pub self_care_advice: Vec<String>,
    pub suggested_facility_type: String,
    pub suggested_specialty: String,
    pub estimated_wait_time: String,
    pub red_flags: Vec<String>,
    pub follow_up_needed: bool,
    pub follow_up_date: Option<jiff::Timestamp>,
    /// Filled in by the facility directory, never by the classifier.
    #[serde(default)]
    pub recommended_facilities: Vec<Uuid>,
}

/// The subset of a [`TriageResult`] kept in a user's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TriageSummary {
    pub severity: Severity,
    pub urgency_level: u8,
    /// The suggested facility type at the time of the check.
    pub recommendation: String,
    pub self_care_advice: Vec<String>,
    pub suggested_specialty: String,
    pub red_flags: Vec<String>,
    pub follow_up_needed: bool,
    pub follow_up_date: Option<jiff::Timestamp>,
}

impl From<&TriageResult> for TriageSummary {
    fn from(result: &TriageResult) -> Self {
        Self {
            severity: result.severity,
            urgency_level: result.urgency_level,
            recommendation: result.suggested_facility_type.clone(),
            self_care_advice: result.self_care_advice.clone(),
            suggested_specialty: result.suggested_specialty.clone(),
            red_flags: result.red_flags.clone(),
            follow_up_needed: result.follow_up_needed,
            follow_up_date: result.follow_up_date,
        }
    }
}
