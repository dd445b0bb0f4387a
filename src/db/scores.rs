//! Score history logging

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Result};

use crate::domain::{Difficulty, InputMode, QuizDirection, QuizType};

/// One finished quiz in the score history
#[derive(Debug, Clone)]
pub struct ScoreRecord {
    pub id: i64,
    pub quiz_type: QuizType,
    pub direction: QuizDirection,
    pub input_mode: InputMode,
    pub total_questions: i64,
    pub correct_answers: i64,
    pub difficulties: Vec<Difficulty>,
    pub tags: Vec<String>,
    pub duration_ms: Option<i64>,
    pub taken_at: DateTime<Utc>,
}

impl ScoreRecord {
    pub fn percentage(&self) -> i64 {
        if self.total_questions > 0 {
            (self.correct_answers * 100) / self.total_questions
        } else {
            0
        }
    }
}

/// Aggregate figures over the whole history
#[derive(Debug, Clone)]
pub struct ScoreSummary {
    pub quizzes_taken: i64,
    pub questions_answered: i64,
    pub correct_answers: i64,
    pub best_percentage: i64,
}

impl ScoreSummary {
    pub fn average_percentage(&self) -> i64 {
        if self.questions_answered > 0 {
            (self.correct_answers * 100) / self.questions_answered
        } else {
            0
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn insert_score(
    conn: &Connection,
    quiz_type: QuizType,
    direction: QuizDirection,
    input_mode: InputMode,
    total_questions: i64,
    correct_answers: i64,
    difficulties: &[Difficulty],
    tags: &[String],
    duration_ms: Option<i64>,
) -> Result<i64> {
    let difficulties_json = serde_json::to_string(difficulties).unwrap_or_else(|_| "[]".into());
    let tags_json = serde_json::to_string(tags).unwrap_or_else(|_| "[]".into());

    conn.execute(
        r#"
    INSERT INTO score_history
      (quiz_type, direction, input_mode, total_questions, correct_answers,
       difficulties, tags, duration_ms, taken_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
    "#,
        params![
            quiz_type.as_str(),
            direction.as_str(),
            input_mode.as_str(),
            total_questions,
            correct_answers,
            difficulties_json,
            tags_json,
            duration_ms,
            Utc::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Most recent scores, newest first
pub fn get_recent_scores(conn: &Connection, limit: i64) -> Result<Vec<ScoreRecord>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT id, quiz_type, direction, input_mode, total_questions, correct_answers,
           difficulties, tags, duration_ms, taken_at
    FROM score_history
    ORDER BY taken_at DESC, id DESC
    LIMIT ?1
    "#,
    )?;

    let scores = stmt
        .query_map(params![limit], row_to_score)?
        .collect::<Result<Vec<_>>>()?;
    Ok(scores)
}

pub fn get_score_summary(conn: &Connection) -> Result<ScoreSummary> {
    conn.query_row(
        r#"
    SELECT COUNT(*),
           COALESCE(SUM(total_questions), 0),
           COALESCE(SUM(correct_answers), 0),
           COALESCE(MAX(CASE WHEN total_questions > 0
                             THEN correct_answers * 100 / total_questions
                             ELSE 0 END), 0)
    FROM score_history
    "#,
        [],
        |row| {
            Ok(ScoreSummary {
                quizzes_taken: row.get(0)?,
                questions_answered: row.get(1)?,
                correct_answers: row.get(2)?,
                best_percentage: row.get(3)?,
            })
        },
    )
}

fn row_to_score(row: &rusqlite::Row) -> Result<ScoreRecord> {
    let quiz_type_str: String = row.get(1)?;
    let direction_str: String = row.get(2)?;
    let input_mode_str: String = row.get(3)?;
    let difficulties_json: String = row.get(6)?;
    let tags_json: String = row.get(7)?;
    let taken_at_str: String = row.get(9)?;

    Ok(ScoreRecord {
        id: row.get(0)?,
        quiz_type: QuizType::from_str(&quiz_type_str).unwrap_or(QuizType::Comprehension),
        direction: QuizDirection::from_str(&direction_str).unwrap_or(QuizDirection::NativeToKorean),
        input_mode: InputMode::from_str(&input_mode_str).unwrap_or(InputMode::MultipleChoice),
        total_questions: row.get(4)?,
        correct_answers: row.get(5)?,
        difficulties: serde_json::from_str(&difficulties_json).unwrap_or_default(),
        tags: serde_json::from_str(&tags_json).unwrap_or_default(),
        duration_ms: row.get(8)?,
        taken_at: DateTime::parse_from_rfc3339(&taken_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
    })
}
