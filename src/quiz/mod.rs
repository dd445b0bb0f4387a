//! Quiz question generation and grading.

pub mod builder;
pub mod grader;

pub use builder::build_questions;
pub use grader::{grade, QuestionOutcome, QuizReport};
