//! The symptom taxonomy: known phrases grouped by severity tier.
//!
//! Phrases are lowercase and matched as plain substrings of lowercased
//! input, so "mild headache" also contains "headache". Overlaps across
//! tiers are settled by scanning tiers in priority order.

use std::sync::LazyLock;

use carepath_core::models::severity::Severity;

const EMERGENCY: &[&str] = &[
    "chest pain",
    "difficulty breathing",
    "severe bleeding",
    "loss of consciousness",
    "stroke symptoms",
    "severe head injury",
    "choking",
    "seizure",
    "suicide thoughts",
    "severe allergic reaction",
    "severe burns",
    "poisoning",
    "severe chest pressure",
    "unable to breathe",
    "uncontrollable bleeding",
    "blue lips",
    "confusion",
    "slurred speech",
    "severe abdominal pain",
    "coughing blood",
    "vomiting blood",
];

const SEVERE: &[&str] = &[
    "high fever",
    "persistent vomiting",
    "severe pain",
    "blood in stool",
    "blood in urine",
    "severe headache",
    "fainting",
    "shortness of breath",
    "rapid heartbeat",
    "severe dizziness",
    "severe weakness",
    "severe dehydration",
    "high blood pressure",
    "irregular heartbeat",
    "severe infection",
    "deep wound",
];

const MODERATE: &[&str] = &[
    "fever",
    "cough",
    "headache",
    "nausea",
    "diarrhea",
    "vomiting",
    "body aches",
    "sore throat",
    "rash",
    "dizziness",
    "ear pain",
    "toothache",
    "joint pain",
    "back pain",
    "mild chest discomfort",
    "stomach pain",
    "constipation",
    "bloating",
];

const MILD: &[&str] = &[
    "mild headache",
    "runny nose",
    "sneezing",
    "mild cough",
    "fatigue",
    "mild fever",
    "stuffy nose",
    "minor cuts",
    "bruises",
    "mild rash",
    "itching",
    "dry skin",
    "mild sore throat",
    "watery eyes",
    "mild muscle aches",
];

/// One severity tier and its phrases, in table order.
#[derive(Debug, Clone, Copy)]
pub struct Tier {
    pub severity: Severity,
    pub phrases: &'static [&'static str],
}

impl Tier {
    /// Every phrase of this tier contained in `lowered`, in table order.
    pub fn matches(self, lowered: &str) -> impl Iterator<Item = &'static str> + '_ {
        self.phrases
            .iter()
            .copied()
            .filter(move |phrase| lowered.contains(phrase))
    }

    pub fn is_match(&self, lowered: &str) -> bool {
        self.phrases.iter().any(|phrase| lowered.contains(phrase))
    }
}

/// The outcome of scanning one piece of text against the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierMatch {
    pub severity: Severity,
    pub phrases: Vec<&'static str>,
}

/// The full taxonomy, ordered highest priority first.
#[derive(Debug)]
pub struct Taxonomy {
    tiers: Vec<Tier>,
}

impl Taxonomy {
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn tier(&self, severity: Severity) -> &Tier {
        // Every severity has a row; the table is built from `Severity::PRIORITY`.
        let index = Severity::PRIORITY
            .iter()
            .position(|s| *s == severity)
            .unwrap_or(Severity::PRIORITY.len() - 1);
        &self.tiers[index]
    }

    /// Scan `text` tier by tier. The first tier with any match wins and
    /// lower tiers are not consulted. No match at all yields an empty
    /// phrase list with the default mild severity.
    pub fn scan(&self, text: &str) -> TierMatch {
        let lowered = text.to_lowercase();
        for tier in &self.tiers {
            let phrases: Vec<_> = tier.matches(&lowered).collect();
            if !phrases.is_empty() {
                return TierMatch {
                    severity: tier.severity,
                    phrases,
                };
            }
        }
        TierMatch {
            severity: Severity::default(),
            phrases: Vec::new(),
        }
    }
}

static TAXONOMY: LazyLock<Taxonomy> = LazyLock::new(|| Taxonomy {
    tiers: Severity::PRIORITY
        .into_iter()
        .map(|severity| Tier {
            severity,
            phrases: match severity {
                Severity::Emergency => EMERGENCY,
                Severity::Severe => SEVERE,
                Severity::Moderate => MODERATE,
                Severity::Mild => MILD,
            },
        })
        .collect(),
});

/// The process-wide taxonomy.
pub fn taxonomy() -> &'static Taxonomy {
    &TAXONOMY
}
