use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A severity tier. Variants are declared in priority order, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Emergency,
    Severe,
    Moderate,
    #[default]
    Mild,
}

impl Severity {
    /// All tiers in the order they are scanned.
    pub const PRIORITY: [Severity; 4] = [
        Severity::Emergency,
        Severity::Severe,
        Severity::Moderate,
        Severity::Mild,
    ];

    /// Urgency shown in the UI, 1 (lowest) to 5.
    pub fn urgency_level(self) -> u8 {
        match self {
            Severity::Emergency => 5,
            Severity::Severe => 4,
            Severity::Moderate => 3,
            Severity::Mild => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Emergency => "emergency",
            Severity::Severe => "severe",
            Severity::Moderate => "moderate",
            Severity::Mild => "mild",
        }
    }

    /// Emergency and severe cases get red flags and no follow-up.
    pub fn is_urgent(self) -> bool {
        matches!(self, Severity::Emergency | Severity::Severe)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::PRIORITY
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| CoreError::UnknownSeverity(s.to_string()))
    }
}
