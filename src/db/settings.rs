//! Key/value application settings

use rusqlite::{params, Connection, Result};

use crate::config;
use crate::domain::InputMode;

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let mut stmt = conn.prepare("SELECT value FROM settings WHERE key = ?1")?;
    let mut rows = stmt.query(params![key])?;
    if let Some(row) = rows.next()? {
        Ok(Some(row.get(0)?))
    } else {
        Ok(None)
    }
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
        params![key, value],
    )?;
    Ok(())
}

/// Quiz length preselected by the settings wizard
pub fn get_default_quiz_length(conn: &Connection) -> Result<u32> {
    Ok(get_setting(conn, "default_quiz_length")?
        .and_then(|v| v.parse().ok())
        .unwrap_or(config::DEFAULT_QUIZ_LENGTH))
}

pub fn set_default_quiz_length(conn: &Connection, length: u32) -> Result<()> {
    set_setting(conn, "default_quiz_length", &length.to_string())
}

pub fn get_default_input_mode(conn: &Connection) -> Result<InputMode> {
    Ok(get_setting(conn, "default_input_mode")?
        .and_then(|v| InputMode::from_str(&v))
        .unwrap_or(InputMode::MultipleChoice))
}

pub fn set_default_input_mode(conn: &Connection, mode: InputMode) -> Result<()> {
    set_setting(conn, "default_input_mode", mode.as_str())
}

/// Whether quiz questions carry the romanization hint
pub fn get_show_phonetic(conn: &Connection) -> Result<bool> {
    get_setting(conn, "show_phonetic").map(|v| v.as_deref() != Some("false"))
}

pub fn set_show_phonetic(conn: &Connection, enabled: bool) -> Result<()> {
    set_setting(conn, "show_phonetic", if enabled { "true" } else { "false" })
}
