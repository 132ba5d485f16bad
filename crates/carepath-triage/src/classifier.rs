//! The triage classifier: a finished symptom list in, a [`TriageResult`] out.

use carepath_core::models::severity::Severity;
use carepath_core::models::triage::TriageResult;
use jiff::{SignedDuration, Timestamp};

use crate::guidance::{facility_for, red_flags, self_care_advice};
use crate::taxonomy::taxonomy;

/// Moderate cases are asked to check back after this long.
pub const FOLLOW_UP_INTERVAL: SignedDuration = SignedDuration::from_hours(7 * 24);

/// Classify `symptoms` as of the current time.
pub fn classify<S: AsRef<str>>(symptoms: &[S]) -> TriageResult {
    classify_at(symptoms, Timestamp::now())
}

/// Classify `symptoms` as if evaluated at `now`.
pub fn classify_at<S: AsRef<str>>(symptoms: &[S], now: Timestamp) -> TriageResult {
    let severity = assess_severity(symptoms);
    let facility = facility_for(severity);

    TriageResult {
        severity,
        urgency_level: severity.urgency_level(),
        self_care_advice: self_care_advice(symptoms, severity),
        suggested_facility_type: facility.facility_type.to_string(),
        suggested_specialty: facility.specialty.to_string(),
        estimated_wait_time: facility.wait_time.to_string(),
        red_flags: red_flags(severity),
        follow_up_needed: matches!(severity, Severity::Moderate | Severity::Mild),
        follow_up_date: (severity == Severity::Moderate).then(|| now + FOLLOW_UP_INTERVAL),
        recommended_facilities: Vec::new(),
    }
}

/// Overall severity of a symptom list.
///
/// Symptoms are checked in order. An emergency match ends the scan. A
/// severe match is kept but scanning continues, since a later symptom may
/// still be an emergency. A moderate match only counts while nothing
/// higher has been seen. Mild is the default and is never tested for.
pub fn assess_severity<S: AsRef<str>>(symptoms: &[S]) -> Severity {
    let taxonomy = taxonomy();
    let mut severity = Severity::Mild;

    for symptom in symptoms {
        let lowered = symptom.as_ref().to_lowercase();
        if taxonomy.tier(Severity::Emergency).is_match(&lowered) {
            return Severity::Emergency;
        } else if taxonomy.tier(Severity::Severe).is_match(&lowered) {
            severity = Severity::Severe;
        } else if severity == Severity::Mild && taxonomy.tier(Severity::Moderate).is_match(&lowered)
        {
            severity = Severity::Moderate;
        }
    }

    severity
}
