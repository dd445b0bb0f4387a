//! Quiz question generation.
//!
//! Pure transformation from a pre-filtered entry pool + settings to an
//! ordered question sequence. The store owns filtering (active flag,
//! difficulty, tags); the builder trusts its input and performs no I/O.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config;
use crate::domain::{GameSettings, InputMode, Question, QuizDirection, QuizLength, VocabEntry};

/// Field the user must produce or select for this direction
fn answer_field(entry: &VocabEntry, direction: QuizDirection) -> &str {
  if direction.answers_in_korean() {
    &entry.korean
  } else {
    &entry.native
  }
}

/// Field shown to the user for this direction
fn prompt_field(entry: &VocabEntry, direction: QuizDirection) -> &str {
  match direction {
    // Listening: the Korean text is the prompt (spoken by the client)
    QuizDirection::KoreanToNative | QuizDirection::KoreanToKorean => &entry.korean,
    QuizDirection::NativeToKorean | QuizDirection::Ordering => &entry.native,
  }
}

/// Build the question sequence for one quiz session.
///
/// Returns exactly the requested number of questions, or one per distinct
/// entry for unlimited length. When the pool is smaller than the requested
/// length, additional full-pool shuffles are appended until the sequence is
/// long enough, so entries repeat; the tail pass is a fresh shuffle and only
/// its prefix survives truncation. An empty pool yields an empty sequence;
/// the caller surfaces that as a no-matching-words state.
pub fn build_questions(
  pool: &[VocabEntry],
  settings: &GameSettings,
  rng: &mut impl Rng,
) -> Vec<Question> {
  if pool.is_empty() {
    return Vec::new();
  }

  let needed = match settings.length {
    QuizLength::Unlimited => pool.len(),
    QuizLength::Limited(n) => n as usize,
  };

  let mut order: Vec<usize> = Vec::with_capacity(needed);
  while order.len() < needed {
    let mut pass: Vec<usize> = (0..pool.len()).collect();
    pass.shuffle(rng);
    order.extend(pass);
  }
  order.truncate(needed);

  order
    .into_iter()
    .map(|idx| build_question(&pool[idx], pool, settings, rng))
    .collect()
}

fn build_question(
  entry: &VocabEntry,
  pool: &[VocabEntry],
  settings: &GameSettings,
  rng: &mut impl Rng,
) -> Question {
  let choices = if settings.input_mode == InputMode::MultipleChoice {
    Some(build_choices(entry, pool, settings.direction, rng))
  } else {
    None
  };

  Question {
    prompt: prompt_field(entry, settings.direction).to_string(),
    correct_answer: answer_field(entry, settings.direction).to_string(),
    phonetic: entry.phonetic.clone(),
    difficulty: entry.difficulty,
    tags: entry.tags.clone(),
    choices,
  }
}

/// Generate the choice set for a multiple-choice question.
///
/// Distractors are drawn from the original full pool, never from the
/// extended sequence, so repeated entries do not skew selection. Fewer than
/// 4 distinct answer values in the pool yields a shorter choice list.
fn build_choices(
  entry: &VocabEntry,
  pool: &[VocabEntry],
  direction: QuizDirection,
  rng: &mut impl Rng,
) -> Vec<String> {
  let correct = answer_field(entry, direction).to_string();

  let mut distractors: Vec<String> = pool
    .iter()
    .filter(|e| e.id != entry.id)
    .map(|e| answer_field(e, direction).to_string())
    .filter(|v| *v != correct)
    .collect();

  distractors.sort();
  distractors.dedup();
  distractors.shuffle(rng);
  distractors.truncate(config::DISTRACTOR_COUNT);

  let mut choices = vec![correct];
  choices.extend(distractors);
  choices.shuffle(rng);

  choices
}
