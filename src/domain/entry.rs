use serde::{Deserialize, Serialize};

/// Difficulty bucket assigned to each vocabulary entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
  Easy,
  Medium,
  Hard,
}

impl Difficulty {
  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "easy" => Some(Self::Easy),
      "medium" => Some(Self::Medium),
      "hard" => Some(Self::Hard),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Easy => "easy",
      Self::Medium => "medium",
      Self::Hard => "hard",
    }
  }

  pub fn all() -> [Difficulty; 3] {
    [Self::Easy, Self::Medium, Self::Hard]
  }
}

/// One vocabulary pair in the personal lexicon.
///
/// `native` and `korean` are the two sides of the translation pair;
/// `phonetic` carries an optional romanization shown as a hint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabEntry {
  pub id: i64,
  pub native: String,
  pub korean: String,
  pub phonetic: Option<String>,
  pub difficulty: Difficulty,
  /// Inactive entries stay in the lexicon but are excluded from quizzes
  pub active: bool,
  pub tags: Vec<String>,
}

impl VocabEntry {
  pub fn new(native: String, korean: String, phonetic: Option<String>, difficulty: Difficulty) -> Self {
    Self {
      id: 0,
      native,
      korean,
      phonetic,
      difficulty,
      active: true,
      tags: Vec::new(),
    }
  }

  /// True if the entry carries at least one of the requested tags
  pub fn has_any_tag(&self, tags: &[String]) -> bool {
    self.tags.iter().any(|t| tags.contains(t))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_difficulty_from_str() {
    assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
    assert_eq!(Difficulty::from_str("medium"), Some(Difficulty::Medium));
    assert_eq!(Difficulty::from_str("hard"), Some(Difficulty::Hard));
  }

  #[test]
  fn test_difficulty_from_str_invalid() {
    assert_eq!(Difficulty::from_str("Easy"), None); // case sensitive
    assert_eq!(Difficulty::from_str(""), None);
    assert_eq!(Difficulty::from_str("impossible"), None);
  }

  #[test]
  fn test_difficulty_roundtrip() {
    for d in Difficulty::all() {
      assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
    }
  }

  #[test]
  fn test_difficulty_serde() {
    let d: Difficulty = serde_json::from_str("\"medium\"").unwrap();
    assert_eq!(d, Difficulty::Medium);
    assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"hard\"");
  }

  #[test]
  fn test_entry_new_defaults() {
    let entry = VocabEntry::new(
      "water".to_string(),
      "물".to_string(),
      Some("mul".to_string()),
      Difficulty::Easy,
    );

    assert_eq!(entry.id, 0);
    assert_eq!(entry.native, "water");
    assert_eq!(entry.korean, "물");
    assert_eq!(entry.phonetic, Some("mul".to_string()));
    assert!(entry.active);
    assert!(entry.tags.is_empty());
  }

  #[test]
  fn test_has_any_tag() {
    let mut entry = VocabEntry::new("dog".into(), "개".into(), None, Difficulty::Easy);
    entry.tags = vec!["animals".to_string(), "basics".to_string()];

    assert!(entry.has_any_tag(&["animals".to_string()]));
    assert!(entry.has_any_tag(&["food".to_string(), "basics".to_string()]));
    assert!(!entry.has_any_tag(&["food".to_string()]));
    assert!(!entry.has_any_tag(&[]));
  }
}
