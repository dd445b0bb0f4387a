use serde::{Deserialize, Serialize};

use super::Difficulty;

/// One quiz question, ephemeral for the duration of a session.
///
/// `choices` is present only for multiple-choice mode and contains the
/// correct answer plus up to 3 distractors in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
  pub prompt: String,
  pub correct_answer: String,
  pub phonetic: Option<String>,
  pub difficulty: Difficulty,
  pub tags: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub choices: Option<Vec<String>>,
}
