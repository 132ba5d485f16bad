use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One exchanged message in a symptom-check session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConversationTurn {
    pub role: TurnRole,
    pub message: String,
    /// Missing timestamps are accepted; older clients omit them.
    #[serde(default)]
    pub timestamp: Option<jiff::Timestamp>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TurnRole {
    User,
    Bot,
}
