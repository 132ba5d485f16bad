use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::conversation::ConversationTurn;
use super::triage::TriageSummary;

/// A completed symptom check saved to a user's history.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SymptomCheck {
    pub id: Uuid,
    pub user_handle: String,
    pub symptoms: Vec<String>,
    pub conversation: Vec<ConversationTurn>,
    pub triage_result: TriageSummary,
    #[serde(default)]
    pub recommended_facilities: Vec<Uuid>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

/// History list entry. Same as [`SymptomCheck`] without the conversation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SymptomCheckSummary {
    pub id: Uuid,
    pub symptoms: Vec<String>,
    pub triage_result: TriageSummary,
    pub recommended_facilities: Vec<Uuid>,
    pub created_at: jiff::Timestamp,
}

impl From<SymptomCheck> for SymptomCheckSummary {
    fn from(check: SymptomCheck) -> Self {
        Self {
            id: check.id,
            symptoms: check.symptoms,
            triage_result: check.triage_result,
            recommended_facilities: check.recommended_facilities,
            created_at: check.created_at,
        }
    }
}
