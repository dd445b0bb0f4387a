//! Lexicon entry CRUD and the quiz pool query

use chrono::Utc;
use rusqlite::{params, params_from_iter, Connection, Result};

use crate::domain::{Difficulty, VocabEntry};

/// Build a `?, ?, ...` placeholder list for a variable-length IN clause
fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}

pub fn insert_entry(conn: &Connection, entry: &VocabEntry) -> Result<i64> {
    conn.execute(
        r#"
    INSERT INTO vocab_entries (native, korean, phonetic, difficulty, active, created_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
    "#,
        params![
            entry.native,
            entry.korean,
            entry.phonetic,
            entry.difficulty.as_str(),
            entry.active,
            Utc::now().to_rfc3339(),
        ],
    )?;
    let id = conn.last_insert_rowid();
    if !entry.tags.is_empty() {
        set_entry_tags(conn, id, &entry.tags)?;
    }
    Ok(id)
}

pub fn get_entry_by_id(conn: &Connection, id: i64) -> Result<Option<VocabEntry>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT id, native, korean, phonetic, difficulty, active
    FROM vocab_entries WHERE id = ?1
    "#,
    )?;

    let mut rows = stmt.query(params![id])?;
    if let Some(row) = rows.next()? {
        let mut entry = row_to_entry(row)?;
        entry.tags = get_entry_tags(conn, entry.id)?;
        Ok(Some(entry))
    } else {
        Ok(None)
    }
}

/// List the whole lexicon, optionally including deactivated entries
pub fn list_entries(conn: &Connection, include_inactive: bool) -> Result<Vec<VocabEntry>> {
    let query = if include_inactive {
        "SELECT id, native, korean, phonetic, difficulty, active
         FROM vocab_entries ORDER BY id ASC"
    } else {
        "SELECT id, native, korean, phonetic, difficulty, active
         FROM vocab_entries WHERE active = 1 ORDER BY id ASC"
    };
    let mut stmt = conn.prepare(query)?;

    let mut entries = stmt
        .query_map([], row_to_entry)?
        .collect::<Result<Vec<_>>>()?;
    for entry in &mut entries {
        entry.tags = get_entry_tags(conn, entry.id)?;
    }
    Ok(entries)
}

pub fn update_entry(conn: &Connection, entry: &VocabEntry) -> Result<bool> {
    let updated = conn.execute(
        r#"
    UPDATE vocab_entries
    SET native = ?1, korean = ?2, phonetic = ?3, difficulty = ?4, active = ?5, updated_at = ?6
    WHERE id = ?7
    "#,
        params![
            entry.native,
            entry.korean,
            entry.phonetic,
            entry.difficulty.as_str(),
            entry.active,
            Utc::now().to_rfc3339(),
            entry.id,
        ],
    )?;
    if updated > 0 {
        set_entry_tags(conn, entry.id, &entry.tags)?;
    }
    Ok(updated > 0)
}

pub fn set_entry_active(conn: &Connection, id: i64, active: bool) -> Result<bool> {
    let updated = conn.execute(
        "UPDATE vocab_entries SET active = ?1, updated_at = ?2 WHERE id = ?3",
        params![active, Utc::now().to_rfc3339(), id],
    )?;
    Ok(updated > 0)
}

pub fn delete_entry(conn: &Connection, id: i64) -> Result<bool> {
    conn.execute("DELETE FROM entry_tags WHERE entry_id = ?1", params![id])?;
    let deleted = conn.execute("DELETE FROM vocab_entries WHERE id = ?1", params![id])?;
    Ok(deleted > 0)
}

/// Replace an entry's tag set
pub fn set_entry_tags(conn: &Connection, entry_id: i64, tags: &[String]) -> Result<()> {
    conn.execute("DELETE FROM entry_tags WHERE entry_id = ?1", params![entry_id])?;
    let mut stmt = conn.prepare("INSERT OR IGNORE INTO entry_tags (entry_id, tag) VALUES (?1, ?2)")?;
    for tag in tags {
        stmt.execute(params![entry_id, tag])?;
    }
    Ok(())
}

pub fn get_entry_tags(conn: &Connection, entry_id: i64) -> Result<Vec<String>> {
    let mut stmt =
        conn.prepare("SELECT tag FROM entry_tags WHERE entry_id = ?1 ORDER BY tag ASC")?;
    let tags = stmt
        .query_map(params![entry_id], |row| row.get(0))?
        .collect::<Result<Vec<_>>>()?;
    Ok(tags)
}

/// All distinct tags in the lexicon
pub fn list_all_tags(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT DISTINCT tag FROM entry_tags ORDER BY tag ASC")?;
    let tags = stmt
        .query_map([], |row| row.get(0))?
        .collect::<Result<Vec<_>>>()?;
    Ok(tags)
}

/// (total, active) entry counts for the index summary
pub fn count_entries(conn: &Connection) -> Result<(i64, i64)> {
    conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(active), 0) FROM vocab_entries",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )
}

/// Fetch the quiz candidate pool: active entries whose difficulty is in the
/// requested set and, when `tags` is non-empty, carrying at least one of
/// the requested tags. Each entry is annotated with its full tag set.
///
/// The variable-length IN lists are bound as parameters; tag values are
/// user input and never spliced into the SQL text.
pub fn fetch_pool(
    conn: &Connection,
    difficulties: &[Difficulty],
    tags: &[String],
) -> Result<Vec<VocabEntry>> {
    if difficulties.is_empty() {
        return Ok(vec![]);
    }

    let mut query = format!(
        r#"
    SELECT e.id, e.native, e.korean, e.phonetic, e.difficulty, e.active
    FROM vocab_entries e
    WHERE e.active = 1 AND e.difficulty IN ({})
    "#,
        placeholders(difficulties.len())
    );

    if !tags.is_empty() {
        query.push_str(&format!(
            "  AND EXISTS (SELECT 1 FROM entry_tags t WHERE t.entry_id = e.id AND t.tag IN ({}))\n",
            placeholders(tags.len())
        ));
    }

    let bind_values: Vec<&str> = difficulties
        .iter()
        .map(|d| d.as_str())
        .chain(tags.iter().map(String::as_str))
        .collect();

    let mut stmt = conn.prepare(&query)?;
    let mut entries = stmt
        .query_map(params_from_iter(bind_values), row_to_entry)?
        .collect::<Result<Vec<_>>>()?;

    for entry in &mut entries {
        entry.tags = get_entry_tags(conn, entry.id)?;
    }
    Ok(entries)
}

/// Convert a database row to a VocabEntry (tags loaded separately)
fn row_to_entry(row: &rusqlite::Row) -> Result<VocabEntry> {
    let difficulty_str: String = row.get(4)?;
    let active_int: i64 = row.get(5)?;

    Ok(VocabEntry {
        id: row.get(0)?,
        native: row.get(1)?,
        korean: row.get(2)?,
        phonetic: row.get(3)?,
        difficulty: Difficulty::from_str(&difficulty_str).unwrap_or(Difficulty::Medium),
        active: active_int != 0,
        tags: Vec::new(),
    })
}
