//! Grading of submitted answer sheets.

use serde::Serialize;

use crate::domain::{InputMode, Question};
use crate::validation::{check_answer, AnswerResult};

/// Outcome for a single question
#[derive(Debug, Clone, Serialize)]
pub struct QuestionOutcome {
  pub prompt: String,
  pub expected: String,
  pub submitted: String,
  pub result: AnswerResult,
}

/// Graded summary of one quiz session
#[derive(Debug, Clone, Serialize)]
pub struct QuizReport {
  pub total: usize,
  pub correct: usize,
  pub outcomes: Vec<QuestionOutcome>,
}

impl QuizReport {
  pub fn percentage(&self) -> i64 {
    if self.total > 0 {
      (self.correct as i64 * 100) / self.total as i64
    } else {
      0
    }
  }
}

/// Grade a full answer sheet against the generated question sequence.
///
/// Answers are matched to questions by position. A missing answer counts
/// as incorrect; surplus answers are ignored.
pub fn grade(questions: &[Question], answers: &[String], input_mode: InputMode) -> QuizReport {
  let mut outcomes = Vec::with_capacity(questions.len());
  let mut correct = 0;

  for (i, question) in questions.iter().enumerate() {
    let submitted = answers.get(i).map(String::as_str).unwrap_or("");
    let result = if submitted.is_empty() {
      AnswerResult::Incorrect
    } else {
      check_answer(submitted, &question.correct_answer, input_mode)
    };

    if result.is_correct() {
      correct += 1;
    }

    outcomes.push(QuestionOutcome {
      prompt: question.prompt.clone(),
      expected: question.correct_answer.clone(),
      submitted: submitted.to_string(),
      result,
    });
  }

  QuizReport {
    total: questions.len(),
    correct,
    outcomes,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Difficulty;

  fn question(prompt: &str, answer: &str) -> Question {
    Question {
      prompt: prompt.to_string(),
      correct_answer: answer.to_string(),
      phonetic: None,
      difficulty: Difficulty::Easy,
      tags: vec![],
      choices: None,
    }
  }

  #[test]
  fn test_grade_all_correct() {
    let questions = vec![question("water", "물"), question("fire", "불")];
    let answers = vec!["물".to_string(), "불".to_string()];

    let report = grade(&questions, &answers, InputMode::FreeText);
    assert_eq!(report.total, 2);
    assert_eq!(report.correct, 2);
    assert_eq!(report.percentage(), 100);
  }

  #[test]
  fn test_grade_partial() {
    let questions = vec![question("water", "물"), question("fire", "불")];
    let answers = vec!["물".to_string(), "물".to_string()];

    let report = grade(&questions, &answers, InputMode::FreeText);
    assert_eq!(report.correct, 1);
    assert_eq!(report.percentage(), 50);
  }

  #[test]
  fn test_grade_missing_answers_are_incorrect() {
    let questions = vec![question("water", "물"), question("fire", "불")];
    let answers = vec!["물".to_string()];

    let report = grade(&questions, &answers, InputMode::FreeText);
    assert_eq!(report.total, 2);
    assert_eq!(report.correct, 1);
    assert_eq!(report.outcomes[1].result, AnswerResult::Incorrect);
    assert_eq!(report.outcomes[1].submitted, "");
  }

  #[test]
  fn test_grade_surplus_answers_ignored() {
    let questions = vec![question("water", "물")];
    let answers = vec!["물".to_string(), "불".to_string(), "개".to_string()];

    let report = grade(&questions, &answers, InputMode::FreeText);
    assert_eq!(report.total, 1);
    assert_eq!(report.correct, 1);
  }

  #[test]
  fn test_grade_close_enough_counts_as_correct() {
    let questions = vec![question("hello", "annyeong")];
    let answers = vec!["annyeung".to_string()];

    let report = grade(&questions, &answers, InputMode::FreeText);
    assert_eq!(report.correct, 1);
    assert_eq!(report.outcomes[0].result, AnswerResult::CloseEnough);
  }

  #[test]
  fn test_grade_strict_for_multiple_choice() {
    let questions = vec![question("water", "물")];
    let answers = vec![" 물".to_string()];

    let report = grade(&questions, &answers, InputMode::MultipleChoice);
    assert_eq!(report.correct, 0);
  }

  #[test]
  fn test_grade_empty_quiz() {
    let report = grade(&[], &[], InputMode::FreeText);
    assert_eq!(report.total, 0);
    assert_eq!(report.percentage(), 0);
  }
}
