/// Symptoms collected over a conversation, owned by the caller.
///
/// The stepper only reports what it found in a single message. Callers
/// keep one of these per session and fold each step into it. Order is
/// first-seen; duplicates are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymptomAccumulator {
    symptoms: Vec<String>,
}

impl SymptomAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one symptom. Returns `false` if it was already present.
    pub fn insert(&mut self, symptom: impl Into<String>) -> bool {
        let symptom = symptom.into();
        if self.contains(&symptom) {
            return false;
        }
        self.symptoms.push(symptom);
        true
    }

    pub fn contains(&self, symptom: &str) -> bool {
        self.symptoms.iter().any(|s| s == symptom)
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.symptoms
    }

    pub fn into_vec(self) -> Vec<String> {
        self.symptoms
    }
}

impl<S: Into<String>> Extend<S> for SymptomAccumulator {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for symptom in iter {
            self.insert(symptom);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for SymptomAccumulator {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}
