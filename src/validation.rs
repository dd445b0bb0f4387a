//! Answer validation for quiz grading.
//!
//! Multiple choice answers come from a closed set and are compared
//! strictly. Typed answers are normalized first (Unicode NFC, case fold,
//! whitespace collapse) so decomposed Hangul jamo and stray spaces do not
//! count against the user, with single-edit typo tolerance on longer
//! answers. Reordered answers must match exactly after normalization.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::domain::InputMode;

/// Result of checking one submitted answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerResult {
  /// Exact match after normalization
  Correct,
  /// One typo away - counts as correct, surfaced to the user as a nudge
  CloseEnough,
  /// Wrong answer
  Incorrect,
}

impl AnswerResult {
  pub fn is_correct(&self) -> bool {
    !matches!(self, Self::Incorrect)
  }
}

/// Minimum answer length (in chars) before typo tolerance applies.
/// Single-syllable Korean answers differ by one jamo edit, so tolerance
/// there would accept genuinely wrong answers.
const TYPO_TOLERANCE_MIN_CHARS: usize = 4;

/// Normalize for comparison: NFC, lowercase, collapsed whitespace
pub fn normalize(s: &str) -> String {
  let composed: String = s.nfc().collect();
  composed
    .to_lowercase()
    .split_whitespace()
    .collect::<Vec<_>>()
    .join(" ")
}

/// Check a submitted answer against the expected one for the given input mode
pub fn check_answer(submitted: &str, expected: &str, input_mode: InputMode) -> AnswerResult {
  if input_mode.is_strict() {
    // Closed option set: the submitted string is one of our own choices
    return if submitted == expected {
      AnswerResult::Correct
    } else {
      AnswerResult::Incorrect
    };
  }

  let submitted = normalize(submitted);
  let expected = normalize(expected);

  if submitted == expected {
    return AnswerResult::Correct;
  }

  if input_mode == InputMode::FreeText
    && expected.chars().count() >= TYPO_TOLERANCE_MIN_CHARS
    && within_one_edit(&submitted, &expected)
  {
    return AnswerResult::CloseEnough;
  }

  AnswerResult::Incorrect
}

/// True if `a` and `b` differ by at most one insertion, deletion, or
/// substitution (edit distance <= 1), computed over chars
fn within_one_edit(a: &str, b: &str) -> bool {
  let a: Vec<char> = a.chars().collect();
  let b: Vec<char> = b.chars().collect();

  let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
  if long.len() - short.len() > 1 {
    return false;
  }

  let mut i = 0;
  let mut j = 0;
  let mut edits = 0;
  while i < short.len() && j < long.len() {
    if short[i] == long[j] {
      i += 1;
      j += 1;
      continue;
    }
    edits += 1;
    if edits > 1 {
      return false;
    }
    if short.len() == long.len() {
      // Substitution
      i += 1;
      j += 1;
    } else {
      // Skip the extra char in the longer string
      j += 1;
    }
  }
  edits + (long.len() - j) + (short.len() - i) <= 1
}
