//! Saved quiz configurations (settings wizard output)

use chrono::Utc;
use rusqlite::{params, Connection, Result};

use crate::domain::{Difficulty, GameSettings, InputMode, QuizDirection, QuizLength, QuizType};

/// A named, persisted settings-wizard result
#[derive(Debug, Clone)]
pub struct SavedQuizConfig {
    pub id: i64,
    pub name: String,
    pub quiz_type: QuizType,
    pub direction: QuizDirection,
    pub input_mode: InputMode,
    pub difficulties: Vec<Difficulty>,
    pub tags: Vec<String>,
    pub length: QuizLength,
}

impl SavedQuizConfig {
    pub fn to_settings(&self) -> GameSettings {
        GameSettings {
            quiz_type: self.quiz_type,
            direction: self.direction,
            input_mode: self.input_mode,
            difficulties: self.difficulties.clone(),
            length: self.length,
            tags: self.tags.clone(),
        }
    }
}

/// Save a configuration under a name. Re-saving an existing name replaces
/// the stored configuration (the latest wizard run wins).
pub fn save_config(conn: &Connection, name: &str, settings: &GameSettings) -> Result<i64> {
    let difficulties = serde_json::to_string(&settings.difficulties).unwrap_or_else(|_| "[]".into());
    let tags = serde_json::to_string(&settings.tags).unwrap_or_else(|_| "[]".into());

    conn.execute(
        r#"
    INSERT OR REPLACE INTO quiz_configs
      (name, quiz_type, direction, input_mode, difficulties, tags, length, created_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
    "#,
        params![
            name,
            settings.quiz_type.as_str(),
            settings.direction.as_str(),
            settings.input_mode.as_str(),
            difficulties,
            tags,
            settings.length.to_option(),
            Utc::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_configs(conn: &Connection) -> Result<Vec<SavedQuizConfig>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT id, name, quiz_type, direction, input_mode, difficulties, tags, length
    FROM quiz_configs
    ORDER BY name ASC
    "#,
    )?;

    let configs = stmt
        .query_map([], row_to_config)?
        .collect::<Result<Vec<_>>>()?;
    Ok(configs)
}

pub fn get_config_by_name(conn: &Connection, name: &str) -> Result<Option<SavedQuizConfig>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT id, name, quiz_type, direction, input_mode, difficulties, tags, length
    FROM quiz_configs
    WHERE name = ?1
    "#,
    )?;

    let mut rows = stmt.query(params![name])?;
    if let Some(row) = rows.next()? {
        Ok(Some(row_to_config(row)?))
    } else {
        Ok(None)
    }
}

pub fn delete_config(conn: &Connection, name: &str) -> Result<bool> {
    let deleted = conn.execute("DELETE FROM quiz_configs WHERE name = ?1", params![name])?;
    Ok(deleted > 0)
}

fn row_to_config(row: &rusqlite::Row) -> Result<SavedQuizConfig> {
    let quiz_type_str: String = row.get(2)?;
    let direction_str: String = row.get(3)?;
    let input_mode_str: String = row.get(4)?;
    let difficulties_json: String = row.get(5)?;
    let tags_json: String = row.get(6)?;
    let length_int: Option<u32> = row.get(7)?;

    Ok(SavedQuizConfig {
        id: row.get(0)?,
        name: row.get(1)?,
        quiz_type: QuizType::from_str(&quiz_type_str).unwrap_or(QuizType::Comprehension),
        direction: QuizDirection::from_str(&direction_str).unwrap_or(QuizDirection::NativeToKorean),
        input_mode: InputMode::from_str(&input_mode_str).unwrap_or(InputMode::MultipleChoice),
        difficulties: serde_json::from_str(&difficulties_json).unwrap_or_default(),
        tags: serde_json::from_str(&tags_json).unwrap_or_default(),
        length: QuizLength::from_option(length_int).unwrap_or(QuizLength::Unlimited),
    })
}
