use carepath_core::models::severity::Severity;
use carepath_triage::classifier::{assess_severity, FOLLOW_UP_INTERVAL};
use carepath_triage::guidance::{EMERGENCY_SCRIPT, RED_FLAGS};
use carepath_triage::{classify, classify_at};
use jiff::Timestamp;

fn evaluated_at() -> Timestamp {
    "2026-03-01T09:30:00Z".parse().unwrap()
}

#[test]
fn chest_pain_is_an_emergency() {
    let result = classify(&["chest pain"]);
    assert_eq!(result.severity, Severity::Emergency);
    assert_eq!(result.urgency_level, 5);
    assert_eq!(result.suggested_facility_type, "Emergency Room");
    assert_eq!(result.suggested_specialty, "Emergency Medicine");
    assert_eq!(result.estimated_wait_time, "Immediate");
    assert!(!result.follow_up_needed);
    assert_eq!(result.follow_up_date, None);
}

#[test]
fn emergency_dominates_other_tiers() {
    let lists: [&[&str]; 3] = [
        &["runny nose", "high fever", "seizure"],
        &["fever", "cough", "vomiting blood"],
        &["severe headache", "Blue Lips"],
    ];
    for symptoms in lists {
        let result = classify(symptoms);
        assert_eq!(result.severity, Severity::Emergency, "{symptoms:?}");
        assert_eq!(result.urgency_level, 5);
        assert_eq!(result.red_flags.len(), RED_FLAGS.len());
    }
}

#[test]
fn emergency_advice_is_the_fixed_script() {
    let result = classify(&["seizure", "fever", "cough", "nausea"]);
    assert_eq!(result.self_care_advice, EMERGENCY_SCRIPT.to_vec());
}

#[test]
fn fever_and_cough_is_moderate_with_follow_up() {
    let now = evaluated_at();
    let result = classify_at(&["fever", "cough"], now);

    assert_eq!(result.severity, Severity::Moderate);
    assert_eq!(result.urgency_level, 3);
    assert!(result.follow_up_needed);
    assert_eq!(result.follow_up_date, Some(now + FOLLOW_UP_INTERVAL));
    assert_eq!(result.suggested_facility_type, "Clinic or General Practitioner");
    assert!(result.red_flags.is_empty());

    let advice = &result.self_care_advice;
    assert!(advice.iter().any(|a| a == "Use cool compresses to reduce fever"));
    assert!(advice.iter().any(|a| a == "Drink warm liquids like tea with honey"));
    assert_eq!(advice.len(), 8);
    assert_eq!(advice[0], "Get plenty of rest and stay hydrated");
    assert_eq!(advice[advice.len() - 1], "Seek medical attention if symptoms worsen");
}

#[test]
fn follow_up_is_exactly_seven_days_later() {
    let now = evaluated_at();
    let result = classify_at(&["sore throat"], now);
    let follow_up = result.follow_up_date.unwrap();
    assert_eq!(follow_up.as_second() - now.as_second(), 7 * 24 * 60 * 60);
}

#[test]
fn empty_list_is_the_mild_default() {
    let empty: [&str; 0] = [];
    let result = classify(&empty);
    assert_eq!(result.severity, Severity::Mild);
    assert_eq!(result.urgency_level, 1);
    assert!(result.red_flags.is_empty());
    assert!(result.follow_up_needed);
    assert_eq!(result.follow_up_date, None);
    assert_eq!(result.suggested_facility_type, "Pharmacy or Telemedicine");
    assert_eq!(result.estimated_wait_time, "Self-care or next available");
    assert!(result.recommended_facilities.is_empty());
    assert_eq!(
        result.self_care_advice,
        vec![
            "Get plenty of rest and stay hydrated",
            "Monitor your symptoms closely",
            "Avoid strenuous activities until symptoms improve",
            "Seek medical attention if symptoms worsen",
        ]
    );
}

#[test]
fn unknown_symptoms_fall_back_to_mild() {
    let result = classify(&["runny nose", "sneezing", "something odd"]);
    assert_eq!(result.severity, Severity::Mild);
    assert_eq!(result.urgency_level, 1);
    assert!(result.red_flags.is_empty());
    assert!(result.follow_up_needed);
    assert_eq!(result.follow_up_date, None);
}

#[test]
fn severe_has_red_flags_and_no_follow_up() {
    let result = classify(&["high fever"]);
    assert_eq!(result.severity, Severity::Severe);
    assert_eq!(result.urgency_level, 4);
    assert_eq!(result.suggested_facility_type, "Urgent Care or Hospital");
    assert_eq!(result.estimated_wait_time, "Within 2-4 hours");
    assert_eq!(result.red_flags, RED_FLAGS.to_vec());
    assert!(!result.follow_up_needed);
    assert_eq!(result.follow_up_date, None);
}

#[test]
fn later_severe_symptom_overrides_moderate() {
    assert_eq!(assess_severity(&["headache", "shortness of breath"]), Severity::Severe);
}

#[test]
fn later_moderate_symptom_does_not_downgrade_severe() {
    assert_eq!(assess_severity(&["shortness of breath", "cough"]), Severity::Severe);
}

#[test]
fn matching_is_substring_based() {
    // "mild headache" contains the moderate phrase "headache".
    assert_eq!(assess_severity(&["mild headache"]), Severity::Moderate);
    assert_eq!(assess_severity(&["a nasty cough since monday"]), Severity::Moderate);
}

#[test]
fn matching_ignores_case() {
    assert_eq!(assess_severity(&["CHEST PAIN"]), Severity::Emergency);
    assert_eq!(assess_severity(&["High Fever"]), Severity::Severe);
}

#[test]
fn keyword_advice_follows_symptom_text() {
    let result = classify(&["back pain", "nausea"]);
    let advice = &result.self_care_advice;
    assert!(advice.iter().any(|a| a == "Apply ice or heat to the affected area"));
    assert!(advice.iter().any(|a| a == "Try ginger tea or peppermint"));
    assert!(!advice.iter().any(|a| a == "Rest in a quiet, dark room"));
    // 2 opening + 2 pain + 3 nausea + 2 closing
    assert_eq!(advice.len(), 9);
}

#[test]
fn categorical_fields_are_deterministic() {
    let symptoms = ["fever", "headache", "stomach pain"];
    let mut first = classify(&symptoms);
    let mut second = classify(&symptoms);
    first.follow_up_date = None;
    second.follow_up_date = None;
    assert_eq!(first, second);

    let now = evaluated_at();
    assert_eq!(classify_at(&symptoms, now), classify_at(&symptoms, now));
}

#[test]
fn result_serializes_camel_case() {
    let result = classify_at(&["fever"], evaluated_at());
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["severity"], "moderate");
    assert_eq!(json["urgencyLevel"], 3);
    assert_eq!(json["followUpNeeded"], true);
    assert_eq!(json["followUpDate"], "2026-03-08T09:30:00Z");
    assert_eq!(json["recommendedFacilities"], serde_json::json!([]));
}

const OPENING: [&str; 2] = [
    "Get plenty of rest and stay hydrated",
    "Monitor your symptoms closely",
];
const CLOSING: [&str; 2] = [
    "Avoid strenuous activities until symptoms improve",
    "Seek medical attention if symptoms worsen",
];

fn expected_advice(keyword_advice: &[&str]) -> Vec<String> {
    OPENING
        .iter()
        .chain(keyword_advice)
        .chain(CLOSING.iter())
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn each_advice_keyword_adds_its_items() {
    let cases: [(&str, &[&str]); 6] = [
        (
            "fever",
            &[
                "Take over-the-counter fever reducers like acetaminophen or ibuprofen",
                "Use cool compresses to reduce fever",
            ],
        ),
        (
            "cough",
            &["Use a humidifier to ease breathing", "Drink warm liquids like tea with honey"],
        ),
        (
            "headache",
            &["Rest in a quiet, dark room", "Apply a cold or warm compress to your head"],
        ),
        (
            "back pain",
            &[
                "Apply ice or heat to the affected area",
                "Take over-the-counter pain relievers as directed",
            ],
        ),
        (
            "nausea",
            &[
                "Sip clear fluids slowly",
                "Avoid solid foods until nausea subsides",
                "Try ginger tea or peppermint",
            ],
        ),
        (
            "vomiting",
            &[
                "Sip clear fluids slowly",
                "Avoid solid foods until nausea subsides",
                "Try ginger tea or peppermint",
            ],
        ),
    ];

    for (symptom, keyword_advice) in cases {
        let result = classify_at(&[symptom], evaluated_at());
        assert_eq!(result.self_care_advice, expected_advice(keyword_advice), "{symptom}");
    }
}

#[test]
fn keyword_advice_keeps_rule_order_not_symptom_order() {
    let result = classify_at(&["vomiting", "headache"], evaluated_at());
    assert_eq!(
        result.self_care_advice,
        expected_advice(&[
            "Rest in a quiet, dark room",
            "Apply a cold or warm compress to your head",
            "Sip clear fluids slowly",
            "Avoid solid foods until nausea subsides",
            "Try ginger tea or peppermint",
        ])
    );
}

#[test]
fn nausea_and_vomiting_share_one_rule() {
    let result = classify_at(&["nausea", "vomiting"], evaluated_at());
    // 2 opening + 3 nausea + 2 closing, not doubled.
    assert_eq!(result.self_care_advice.len(), 7);
}
