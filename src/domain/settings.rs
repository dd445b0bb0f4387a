//! Quiz settings produced by the settings wizard.

use serde::{Deserialize, Serialize};

use super::Difficulty;

/// Overall quiz mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizType {
  Comprehension,
  Writing,
  Listening,
  Ordering,
}

impl QuizType {
  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "comprehension" => Some(Self::Comprehension),
      "writing" => Some(Self::Writing),
      "listening" => Some(Self::Listening),
      "ordering" => Some(Self::Ordering),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Comprehension => "comprehension",
      Self::Writing => "writing",
      Self::Listening => "listening",
      Self::Ordering => "ordering",
    }
  }
}

/// Which field is the prompt and which is the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizDirection {
  /// Native prompt, Korean answer
  NativeToKorean,
  /// Korean prompt, native answer
  KoreanToNative,
  /// Korean prompt, Korean answer (listening: prompt is spoken)
  KoreanToKorean,
  /// Native prompt, Korean answer reassembled character by character
  Ordering,
}

impl QuizDirection {
  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "native_to_korean" => Some(Self::NativeToKorean),
      "korean_to_native" => Some(Self::KoreanToNative),
      "korean_to_korean" => Some(Self::KoreanToKorean),
      "ordering" => Some(Self::Ordering),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::NativeToKorean => "native_to_korean",
      Self::KoreanToNative => "korean_to_native",
      Self::KoreanToKorean => "korean_to_korean",
      Self::Ordering => "ordering",
    }
  }

  /// True when the answer side of the pair is the Korean field
  pub fn answers_in_korean(&self) -> bool {
    !matches!(self, Self::KoreanToNative)
  }
}

/// How the user provides their answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
  /// Pick from a closed set of options - strict matching
  #[default]
  MultipleChoice,
  /// Type the answer - normalized matching with typo tolerance
  FreeText,
  /// Reassemble the answer from shuffled characters - normalized exact
  Reorder,
}

impl InputMode {
  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "multiple_choice" => Some(Self::MultipleChoice),
      "free_text" => Some(Self::FreeText),
      "reorder" => Some(Self::Reorder),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::MultipleChoice => "multiple_choice",
      Self::FreeText => "free_text",
      Self::Reorder => "reorder",
    }
  }

  /// Strict matching for closed option sets, lenient for typed input
  pub fn is_strict(&self) -> bool {
    matches!(self, Self::MultipleChoice)
  }
}

/// Requested quiz length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizLength {
  /// Exactly this many questions, repeating entries if the pool is smaller
  Limited(u32),
  /// Every distinct matching entry exactly once
  Unlimited,
}

impl QuizLength {
  /// Wire form: a positive integer, or None for unlimited
  pub fn from_option(n: Option<u32>) -> Option<Self> {
    match n {
      Some(0) => None,
      Some(n) => Some(Self::Limited(n)),
      None => Some(Self::Unlimited),
    }
  }

  pub fn to_option(&self) -> Option<u32> {
    match self {
      Self::Limited(n) => Some(*n),
      Self::Unlimited => None,
    }
  }
}

/// Full settings object handed to the question builder.
///
/// The settings wizard validates before constructing this: `difficulties`
/// is non-empty and `length` is positive or unlimited. The builder trusts
/// these preconditions.
#[derive(Debug, Clone)]
pub struct GameSettings {
  pub quiz_type: QuizType,
  pub direction: QuizDirection,
  pub input_mode: InputMode,
  pub difficulties: Vec<Difficulty>,
  pub length: QuizLength,
  /// Empty means no tag constraint
  pub tags: Vec<String>,
}
