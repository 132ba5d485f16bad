//! Reference list of common symptoms for UI pickers. Never consulted by
//! the classifier.

use carepath_core::models::common_symptom::{CommonSymptom, SymptomCategory};

const fn entry(name: &'static str, category: SymptomCategory) -> CommonSymptom {
    CommonSymptom { name, category }
}

static COMMON_SYMPTOMS: [CommonSymptom; 15] = [
    entry("Fever", SymptomCategory::General),
    entry("Cough", SymptomCategory::Respiratory),
    entry("Headache", SymptomCategory::Neurological),
    entry("Sore Throat", SymptomCategory::Respiratory),
    entry("Fatigue", SymptomCategory::General),
    entry("Body Aches", SymptomCategory::Musculoskeletal),
    entry("Nausea", SymptomCategory::Gastrointestinal),
    entry("Diarrhea", SymptomCategory::Gastrointestinal),
    entry("Shortness of Breath", SymptomCategory::Respiratory),
    entry("Dizziness", SymptomCategory::Neurological),
    entry("Chest Pain", SymptomCategory::Cardiovascular),
    entry("Abdominal Pain", SymptomCategory::Gastrointestinal),
    entry("Rash", SymptomCategory::Dermatological),
    entry("Runny Nose", SymptomCategory::Respiratory),
    entry("Loss of Taste/Smell", SymptomCategory::Sensory),
];

pub fn common_symptoms() -> &'static [CommonSymptom] {
    &COMMON_SYMPTOMS
}
