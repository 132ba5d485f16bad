//! The conversation stepper: one chat message in, the next bot reply out.
//!
//! Stage is decided by the number of prior turns alone. A conversation
//! that never mentions a known symptom still reaches the assessment
//! stage after four turns.

use carepath_core::models::conversation::ConversationTurn;
use carepath_core::models::severity::Severity;
use rand::Rng;

use crate::taxonomy::taxonomy;

/// Prior turns below this count get the intake reply.
const INTAKE_TURNS: usize = 2;
/// Prior turns at or above this count finish the assessment.
const ASSESSMENT_TURNS: usize = 4;

pub const DURATION_SUGGESTIONS: [&str; 3] = [
    "Symptoms started today",
    "Symptoms for a few days",
    "More than a week",
];

pub const FOLLOW_UP_SUGGESTIONS: [&str; 3] = ["Yes", "No", "I'm not sure"];

pub const FOLLOW_UP_QUESTIONS: [&str; 8] = [
    "How long have you been experiencing these symptoms?",
    "On a scale of 1-10, how would you rate your discomfort?",
    "Have you noticed any other symptoms?",
    "Have you taken any medication for this?",
    "Do you have any pre-existing medical conditions?",
    "Are your symptoms getting worse, staying the same, or improving?",
    "Does anything make your symptoms better or worse?",
    "Have you had this before?",
];

pub const DESCRIBE_SYMPTOMS_REPLY: &str =
    "Could you describe your symptoms in more detail? For example, what are you feeling and where?";

pub const ASSESSMENT_READY_REPLY: &str = "Thank you for providing that information. I have enough details to give you an assessment. Click 'Complete Assessment' to see your results.";

/// Where a conversation is, judged by how many turns came before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Intake,
    FollowUp,
    Ready,
}

impl Stage {
    pub fn for_turn_count(turns: usize) -> Self {
        if turns < INTAKE_TURNS {
            Stage::Intake
        } else if turns < ASSESSMENT_TURNS {
            Stage::FollowUp
        } else {
            Stage::Ready
        }
    }
}

/// Picks an index into the follow-up question bank.
pub trait QuestionSelector {
    /// Return an index in `0..bank_len`. Larger values wrap.
    fn select(&mut self, bank_len: usize) -> usize;
}

/// Uniform choice from any `rand` generator.
pub struct UniformSelector<R>(pub R);

impl<R: Rng> QuestionSelector for UniformSelector<R> {
    fn select(&mut self, bank_len: usize) -> usize {
        self.0.gen_range(0..bank_len)
    }
}

/// Always picks the same question. Useful for replay and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedSelector(pub usize);

impl QuestionSelector for FixedSelector {
    fn select(&mut self, _bank_len: usize) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub reply: String,
    /// Symptoms found in this message only.
    pub identified_symptoms: Vec<String>,
    pub suggestions: Vec<String>,
    pub assessment_complete: bool,
    /// Interim signal from this message; not the final classification.
    pub severity: Severity,
}

/// Advance the conversation using a thread-local random question picker.
pub fn step(message: &str, prior_turns: &[ConversationTurn]) -> StepOutcome {
    step_with(message, prior_turns, &mut UniformSelector(rand::thread_rng()))
}

pub fn step_with<S: QuestionSelector + ?Sized>(
    message: &str,
    prior_turns: &[ConversationTurn],
    selector: &mut S,
) -> StepOutcome {
    let found = taxonomy().scan(message);
    let identified_symptoms: Vec<String> = found.phrases.iter().map(|p| p.to_string()).collect();

    let (reply, suggestions, assessment_complete) = match Stage::for_turn_count(prior_turns.len()) {
        Stage::Intake => {
            let reply = if identified_symptoms.is_empty() {
                DESCRIBE_SYMPTOMS_REPLY.to_string()
            } else {
                format!(
                    "I understand you're experiencing {}. Can you tell me more about when these symptoms started and how severe they are?",
                    identified_symptoms.join(", ")
                )
            };
            (reply, owned(&DURATION_SUGGESTIONS), false)
        }
        Stage::FollowUp => {
            let index = selector.select(FOLLOW_UP_QUESTIONS.len()) % FOLLOW_UP_QUESTIONS.len();
            (
                FOLLOW_UP_QUESTIONS[index].to_string(),
                owned(&FOLLOW_UP_SUGGESTIONS),
                false,
            )
        }
        Stage::Ready => (ASSESSMENT_READY_REPLY.to_string(), Vec::new(), true),
    };

    StepOutcome {
        reply,
        identified_symptoms,
        suggestions,
        assessment_complete,
        severity: found.severity,
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
