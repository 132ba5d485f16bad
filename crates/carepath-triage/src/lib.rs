//! carepath-triage
//!
//! The rule-based triage engine. Pure data and pure functions — no I/O,
//! no shared mutable state. Every call is independent and safe to run on
//! any thread.
//!
//! - [`stepper`] advances a chat conversation one message at a time.
//! - [`accumulator`] holds the symptoms a caller has collected so far.
//! - [`classifier`] turns a finished symptom list into a [`TriageResult`].
//!
//! [`TriageResult`]: carepath_core::models::triage::TriageResult

pub mod accumulator;
pub mod catalog;
pub mod classifier;
pub mod guidance;
pub mod stepper;
pub mod taxonomy;

pub use accumulator::SymptomAccumulator;
pub use classifier::{classify, classify_at};
pub use stepper::{step, step_with, StepOutcome};
