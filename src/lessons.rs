//! Built-in lesson content.
//!
//! Lessons are static word lists shipped with the app. They can be browsed
//! as-is or imported into the personal lexicon, where the entries become
//! editable like any other.

use rusqlite::{params, Connection, Result};

use crate::db;
use crate::domain::{Difficulty, VocabEntry};

pub struct LessonWord {
  pub native: &'static str,
  pub korean: &'static str,
  pub phonetic: &'static str,
  pub difficulty: Difficulty,
}

pub struct Lesson {
  pub id: &'static str,
  pub title: &'static str,
  pub description: &'static str,
  /// Tag applied to entries imported from this lesson
  pub tag: &'static str,
  pub words: &'static [LessonWord],
}

const STARTER_WORDS: [LessonWord; 12] = [
  LessonWord { native: "water", korean: "물", phonetic: "mul", difficulty: Difficulty::Easy },
  LessonWord { native: "fire", korean: "불", phonetic: "bul", difficulty: Difficulty::Easy },
  LessonWord { native: "house", korean: "집", phonetic: "jip", difficulty: Difficulty::Easy },
  LessonWord { native: "dog", korean: "개", phonetic: "gae", difficulty: Difficulty::Easy },
  LessonWord { native: "cat", korean: "고양이", phonetic: "goyangi", difficulty: Difficulty::Easy },
  LessonWord { native: "person", korean: "사람", phonetic: "saram", difficulty: Difficulty::Easy },
  LessonWord { native: "friend", korean: "친구", phonetic: "chingu", difficulty: Difficulty::Easy },
  LessonWord { native: "school", korean: "학교", phonetic: "hakgyo", difficulty: Difficulty::Easy },
  LessonWord { native: "book", korean: "책", phonetic: "chaek", difficulty: Difficulty::Easy },
  LessonWord { native: "hello", korean: "안녕하세요", phonetic: "annyeonghaseyo", difficulty: Difficulty::Medium },
  LessonWord { native: "thank you", korean: "감사합니다", phonetic: "gamsahamnida", difficulty: Difficulty::Medium },
  LessonWord { native: "yes", korean: "네", phonetic: "ne", difficulty: Difficulty::Easy },
];

const FOOD_WORDS: [LessonWord; 10] = [
  LessonWord { native: "rice, meal", korean: "밥", phonetic: "bap", difficulty: Difficulty::Easy },
  LessonWord { native: "kimchi", korean: "김치", phonetic: "gimchi", difficulty: Difficulty::Easy },
  LessonWord { native: "bread", korean: "빵", phonetic: "ppang", difficulty: Difficulty::Easy },
  LessonWord { native: "milk", korean: "우유", phonetic: "uyu", difficulty: Difficulty::Easy },
  LessonWord { native: "apple", korean: "사과", phonetic: "sagwa", difficulty: Difficulty::Easy },
  LessonWord { native: "meat", korean: "고기", phonetic: "gogi", difficulty: Difficulty::Easy },
  LessonWord { native: "fish", korean: "생선", phonetic: "saengseon", difficulty: Difficulty::Medium },
  LessonWord { native: "vegetables", korean: "채소", phonetic: "chaeso", difficulty: Difficulty::Medium },
  LessonWord { native: "restaurant", korean: "식당", phonetic: "sikdang", difficulty: Difficulty::Medium },
  LessonWord { native: "to be delicious", korean: "맛있다", phonetic: "masitda", difficulty: Difficulty::Medium },
];

const TRAVEL_WORDS: [LessonWord; 10] = [
  LessonWord { native: "bus", korean: "버스", phonetic: "beoseu", difficulty: Difficulty::Easy },
  LessonWord { native: "train", korean: "기차", phonetic: "gicha", difficulty: Difficulty::Medium },
  LessonWord { native: "subway", korean: "지하철", phonetic: "jihacheol", difficulty: Difficulty::Medium },
  LessonWord { native: "airport", korean: "공항", phonetic: "gonghang", difficulty: Difficulty::Medium },
  LessonWord { native: "ticket", korean: "표", phonetic: "pyo", difficulty: Difficulty::Medium },
  LessonWord { native: "where", korean: "어디", phonetic: "eodi", difficulty: Difficulty::Medium },
  LessonWord { native: "left side", korean: "왼쪽", phonetic: "oenjjok", difficulty: Difficulty::Hard },
  LessonWord { native: "right side", korean: "오른쪽", phonetic: "oreunjjok", difficulty: Difficulty::Hard },
  LessonWord { native: "straight ahead", korean: "직진", phonetic: "jikjin", difficulty: Difficulty::Hard },
  LessonWord { native: "how much is it?", korean: "얼마예요", phonetic: "eolmayeyo", difficulty: Difficulty::Hard },
];

/// All built-in lessons
pub const LESSONS: [Lesson; 3] = [
  Lesson {
    id: "starter",
    title: "Lesson 1: Everyday Basics",
    description: "Common nouns and greetings for a first vocabulary",
    tag: "basics",
    words: &STARTER_WORDS,
  },
  Lesson {
    id: "food",
    title: "Lesson 2: Food & Drink",
    description: "Ordering, shopping, and talking about meals",
    tag: "food",
    words: &FOOD_WORDS,
  },
  Lesson {
    id: "travel",
    title: "Lesson 3: Getting Around",
    description: "Transport and directions for travelling in Korea",
    tag: "travel",
    words: &TRAVEL_WORDS,
  },
];

/// Get lesson by ID
pub fn get_lesson(id: &str) -> Option<&'static Lesson> {
  LESSONS.iter().find(|l| l.id == id)
}

/// Import a lesson's words into the lexicon, tagged with the lesson tag.
/// Words whose Korean form is already present are skipped. Returns the
/// number of entries inserted.
pub fn import_lesson(conn: &Connection, lesson: &Lesson) -> Result<usize> {
  let mut inserted = 0;
  for word in lesson.words {
    let exists: i64 = conn.query_row(
      "SELECT COUNT(*) FROM vocab_entries WHERE korean = ?1",
      params![word.korean],
      |row| row.get(0),
    )?;
    if exists > 0 {
      continue;
    }

    let mut entry = VocabEntry::new(
      word.native.to_string(),
      word.korean.to_string(),
      Some(word.phonetic.to_string()),
      word.difficulty,
    );
    entry.tags = vec![lesson.tag.to_string()];
    db::insert_entry(conn, &entry)?;
    inserted += 1;
  }
  Ok(inserted)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::db::schema::run_migrations;

  fn test_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    run_migrations(&conn).unwrap();
    conn
  }

  #[test]
  fn test_get_lesson() {
    assert!(get_lesson("starter").is_some());
    assert!(get_lesson("food").is_some());
    assert!(get_lesson("travel").is_some());
    assert!(get_lesson("nope").is_none());
  }

  #[test]
  fn test_lessons_have_distinct_ids() {
    let mut ids: Vec<&str> = LESSONS.iter().map(|l| l.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), LESSONS.len());
  }

  #[test]
  fn test_lesson_words_are_complete() {
    for lesson in &LESSONS {
      assert!(!lesson.words.is_empty());
      for word in lesson.words {
        assert!(!word.native.is_empty());
        assert!(!word.korean.is_empty());
        assert!(!word.phonetic.is_empty());
      }
    }
  }

  #[test]
  fn test_import_lesson() {
    let conn = test_conn();
    let lesson = get_lesson("food").unwrap();

    let inserted = import_lesson(&conn, lesson).unwrap();
    assert_eq!(inserted, lesson.words.len());

    let entries = db::list_entries(&conn, true).unwrap();
    assert_eq!(entries.len(), lesson.words.len());
    assert!(entries.iter().all(|e| e.tags == vec!["food".to_string()]));
  }

  #[test]
  fn test_import_lesson_skips_existing_korean() {
    let conn = test_conn();
    let lesson = get_lesson("food").unwrap();

    // Pre-existing entry with the same Korean form as a lesson word
    db::insert_entry(
      &conn,
      &VocabEntry::new("cooked rice".into(), "밥".into(), None, Difficulty::Easy),
    )
    .unwrap();

    let inserted = import_lesson(&conn, lesson).unwrap();
    assert_eq!(inserted, lesson.words.len() - 1);
  }

  #[test]
  fn test_import_lesson_twice_inserts_once() {
    let conn = test_conn();
    let lesson = get_lesson("travel").unwrap();

    assert_eq!(import_lesson(&conn, lesson).unwrap(), lesson.words.len());
    assert_eq!(import_lesson(&conn, lesson).unwrap(), 0);
  }
}
