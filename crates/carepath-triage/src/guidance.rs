//! Lookup tables that turn a severity into care guidance.

use carepath_core::models::severity::Severity;

/// Where to go, who to see, and how soon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacilityInfo {
    pub facility_type: &'static str,
    pub specialty: &'static str,
    pub wait_time: &'static str,
}

static FACILITY_TABLE: [(Severity, FacilityInfo); 4] = [
    (
        Severity::Emergency,
        FacilityInfo {
            facility_type: "Emergency Room",
            specialty: "Emergency Medicine",
            wait_time: "Immediate",
        },
    ),
    (
        Severity::Severe,
        FacilityInfo {
            facility_type: "Urgent Care or Hospital",
            specialty: "General Medicine",
            wait_time: "Within 2-4 hours",
        },
    ),
    (
        Severity::Moderate,
        FacilityInfo {
            facility_type: "Clinic or General Practitioner",
            specialty: "General Practice",
            wait_time: "1-2 days",
        },
    ),
    (
        Severity::Mild,
        FacilityInfo {
            facility_type: "Pharmacy or Telemedicine",
            specialty: "General Consultation",
            wait_time: "Self-care or next available",
        },
    ),
];

pub fn facility_for(severity: Severity) -> FacilityInfo {
    FACILITY_TABLE
        .iter()
        .find(|(tier, _)| *tier == severity)
        .map(|(_, info)| *info)
        .unwrap_or(FACILITY_TABLE[FACILITY_TABLE.len() - 1].1)
}

pub const EMERGENCY_SCRIPT: [&str; 3] = [
    "Call emergency services immediately (999/911/112)",
    "Do not drive yourself to the hospital",
    "Stay calm and wait for emergency responders",
];

static OPENING_ADVICE: [&str; 2] = [
    "Get plenty of rest and stay hydrated",
    "Monitor your symptoms closely",
];

static CLOSING_ADVICE: [&str; 2] = [
    "Avoid strenuous activities until symptoms improve",
    "Seek medical attention if symptoms worsen",
];

/// Extra advice appended when any keyword appears in the symptom text.
struct AdviceRule {
    keywords: &'static [&'static str],
    advice: &'static [&'static str],
}

static ADVICE_RULES: [AdviceRule; 5] = [
    AdviceRule {
        keywords: &["fever"],
        advice: &[
            "Take over-the-counter fever reducers like acetaminophen or ibuprofen",
            "Use cool compresses to reduce fever",
        ],
    },
    AdviceRule {
        keywords: &["cough"],
        advice: &[
            "Use a humidifier to ease breathing",
            "Drink warm liquids like tea with honey",
        ],
    },
    AdviceRule {
        keywords: &["headache"],
        advice: &[
            "Rest in a quiet, dark room",
            "Apply a cold or warm compress to your head",
        ],
    },
    AdviceRule {
        keywords: &["pain"],
        advice: &[
            "Apply ice or heat to the affected area",
            "Take over-the-counter pain relievers as directed",
        ],
    },
    AdviceRule {
        keywords: &["nausea", "vomiting"],
        advice: &[
            "Sip clear fluids slowly",
            "Avoid solid foods until nausea subsides",
            "Try ginger tea or peppermint",
        ],
    },
];

/// Self-care advice for a classified symptom list.
///
/// Emergencies get only the emergency script. Everything else gets the
/// opening items, any keyword-triggered items in rule order, then the
/// closing items.
pub fn self_care_advice<S: AsRef<str>>(symptoms: &[S], severity: Severity) -> Vec<String> {
    if severity == Severity::Emergency {
        return EMERGENCY_SCRIPT.iter().map(|s| s.to_string()).collect();
    }

    let joined = symptoms
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let conditional = ADVICE_RULES
        .iter()
        .filter(|rule| rule.keywords.iter().any(|k| joined.contains(k)))
        .flat_map(|rule| rule.advice.iter());

    OPENING_ADVICE
        .iter()
        .chain(conditional)
        .chain(CLOSING_ADVICE.iter())
        .map(|s| s.to_string())
        .collect()
}

pub const RED_FLAGS: [&str; 7] = [
    "Difficulty breathing or shortness of breath",
    "Chest pain or pressure",
    "Severe bleeding that won't stop",
    "Signs of stroke (facial drooping, arm weakness, speech difficulty)",
    "Loss of consciousness or severe confusion",
    "Severe allergic reaction with swelling",
    "High fever (above 103°F/39.4°C) that doesn't respond to medication",
];

/// Warning signs to surface; empty unless the case is urgent.
pub fn red_flags(severity: Severity) -> Vec<String> {
    if severity.is_urgent() {
        RED_FLAGS.iter().map(|s| s.to_string()).collect()
    } else {
        Vec::new()
    }
}
