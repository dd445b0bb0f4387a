use rusqlite::{Connection, Result};

pub fn run_migrations(conn: &Connection) -> Result<()> {
    // Create tables with COMPLETE schema for new databases
    // Migrations below handle upgrades for existing databases
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS vocab_entries (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      native TEXT NOT NULL,
      korean TEXT NOT NULL,
      phonetic TEXT,
      difficulty TEXT NOT NULL DEFAULT 'medium',
      active INTEGER NOT NULL DEFAULT 1,
      created_at TEXT NOT NULL,
      updated_at TEXT
    );

    CREATE TABLE IF NOT EXISTS entry_tags (
      entry_id INTEGER NOT NULL,
      tag TEXT NOT NULL,
      PRIMARY KEY (entry_id, tag),
      FOREIGN KEY (entry_id) REFERENCES vocab_entries(id)
    );

    CREATE TABLE IF NOT EXISTS quiz_configs (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      name TEXT NOT NULL UNIQUE,
      quiz_type TEXT NOT NULL,
      direction TEXT NOT NULL,
      input_mode TEXT NOT NULL,
      difficulties TEXT NOT NULL,
      tags TEXT NOT NULL DEFAULT '[]',
      length INTEGER,
      created_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS score_history (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      quiz_type TEXT NOT NULL,
      direction TEXT NOT NULL,
      input_mode TEXT NOT NULL,
      total_questions INTEGER NOT NULL,
      correct_answers INTEGER NOT NULL,
      difficulties TEXT NOT NULL DEFAULT '[]',
      tags TEXT NOT NULL DEFAULT '[]',
      duration_ms INTEGER,
      taken_at TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS settings (
      key TEXT PRIMARY KEY,
      value TEXT NOT NULL
    );

    -- Default settings
    INSERT OR IGNORE INTO settings (key, value) VALUES ('default_quiz_length', '10');
    INSERT OR IGNORE INTO settings (key, value) VALUES ('default_input_mode', 'multiple_choice');
    INSERT OR IGNORE INTO settings (key, value) VALUES ('show_phonetic', 'true');

    -- Indexes
    CREATE INDEX IF NOT EXISTS idx_entries_difficulty ON vocab_entries(difficulty);
    CREATE INDEX IF NOT EXISTS idx_entries_active ON vocab_entries(active);
    CREATE INDEX IF NOT EXISTS idx_entry_tags_tag ON entry_tags(tag);
    CREATE INDEX IF NOT EXISTS idx_scores_taken_at ON score_history(taken_at);
    "#,
    )?;

    // ============================================================
    // MIGRATIONS FOR EXISTING DATABASES
    // These are no-ops for new databases (columns already exist)
    // ============================================================

    // Migration: Add updated_at column (entries created before edit support)
    add_column_if_missing(conn, "vocab_entries", "updated_at", "TEXT")?;

    // Migration: Add duration_ms to score history
    add_column_if_missing(conn, "score_history", "duration_ms", "INTEGER")?;

    Ok(())
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> bool {
    conn
        .prepare(&format!("SELECT {} FROM {} LIMIT 1", column, table))
        .is_ok()
}

/// Add a column if it doesn't already exist
fn add_column_if_missing(conn: &Connection, table: &str, column: &str, column_def: &str) -> Result<()> {
    if !column_exists(conn, table, column) {
        conn.execute(
            &format!("ALTER TABLE {} ADD COLUMN {} {}", table, column, column_def),
            [],
        )?;
    }
    Ok(())
}
