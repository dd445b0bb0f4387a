//! Lexicon CRUD endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::db::{self, DbPool};
use crate::domain::{Difficulty, VocabEntry};

use super::{db_unavailable, error_response};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
  #[serde(default)]
  pub include_inactive: bool,
}

#[derive(Debug, Deserialize)]
pub struct EntryPayload {
  pub native: String,
  pub korean: String,
  pub phonetic: Option<String>,
  pub difficulty: String,
  #[serde(default)]
  pub tags: Vec<String>,
  pub active: Option<bool>,
}

impl EntryPayload {
  /// Validate and convert into a domain entry (id 0)
  fn into_entry(self) -> Result<VocabEntry, Response> {
    let native = self.native.trim().to_string();
    let korean = self.korean.trim().to_string();
    if native.is_empty() || korean.is_empty() {
      return Err(error_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        "native and korean must not be empty",
      ));
    }

    let difficulty = match Difficulty::from_str(&self.difficulty) {
      Some(d) => d,
      None => {
        return Err(error_response(
          StatusCode::UNPROCESSABLE_ENTITY,
          "difficulty must be one of: easy, medium, hard",
        ))
      }
    };

    let mut entry = VocabEntry::new(
      native,
      korean,
      self.phonetic.filter(|p| !p.trim().is_empty()),
      difficulty,
    );
    entry.active = self.active.unwrap_or(true);
    entry.tags = self.tags;
    entry.tags.retain(|t| !t.trim().is_empty());
    entry.tags.sort();
    entry.tags.dedup();
    Ok(entry)
  }
}

pub async fn list(State(pool): State<DbPool>, Query(query): Query<ListQuery>) -> Response {
  let conn = match db::try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return db_unavailable(),
  };

  match db::list_entries(&conn, query.include_inactive) {
    Ok(entries) => Json(entries).into_response(),
    Err(e) => {
      tracing::warn!("Failed to list entries: {}", e);
      error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to list entries")
    }
  }
}

pub async fn create(State(pool): State<DbPool>, Json(payload): Json<EntryPayload>) -> Response {
  let entry = match payload.into_entry() {
    Ok(entry) => entry,
    Err(response) => return response,
  };

  let conn = match db::try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return db_unavailable(),
  };

  match db::insert_entry(&conn, &entry) {
    Ok(id) => match db::get_entry_by_id(&conn, id) {
      Ok(Some(created)) => (StatusCode::CREATED, Json(created)).into_response(),
      _ => error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to read created entry"),
    },
    Err(e) => {
      tracing::warn!("Failed to insert entry: {}", e);
      error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to insert entry")
    }
  }
}

pub async fn get_one(State(pool): State<DbPool>, Path(id): Path<i64>) -> Response {
  let conn = match db::try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return db_unavailable(),
  };

  match db::get_entry_by_id(&conn, id) {
    Ok(Some(entry)) => Json(entry).into_response(),
    Ok(None) => error_response(StatusCode::NOT_FOUND, "Entry not found"),
    Err(e) => {
      tracing::warn!("Failed to load entry {}: {}", id, e);
      error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load entry")
    }
  }
}

pub async fn update(
  State(pool): State<DbPool>,
  Path(id): Path<i64>,
  Json(payload): Json<EntryPayload>,
) -> Response {
  let mut entry = match payload.into_entry() {
    Ok(entry) => entry,
    Err(response) => return response,
  };
  entry.id = id;

  let conn = match db::try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return db_unavailable(),
  };

  match db::update_entry(&conn, &entry) {
    Ok(true) => match db::get_entry_by_id(&conn, id) {
      Ok(Some(updated)) => Json(updated).into_response(),
      _ => error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to read updated entry"),
    },
    Ok(false) => error_response(StatusCode::NOT_FOUND, "Entry not found"),
    Err(e) => {
      tracing::warn!("Failed to update entry {}: {}", id, e);
      error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to update entry")
    }
  }
}

pub async fn remove(State(pool): State<DbPool>, Path(id): Path<i64>) -> Response {
  let conn = match db::try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return db_unavailable(),
  };

  match db::delete_entry(&conn, id) {
    Ok(true) => Json(json!({ "deleted": true })).into_response(),
    Ok(false) => error_response(StatusCode::NOT_FOUND, "Entry not found"),
    Err(e) => {
      tracing::warn!("Failed to delete entry {}: {}", id, e);
      error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete entry")
    }
  }
}

#[derive(Debug, Deserialize)]
pub struct ActivePayload {
  pub active: bool,
}

pub async fn set_active(
  State(pool): State<DbPool>,
  Path(id): Path<i64>,
  Json(payload): Json<ActivePayload>,
) -> Response {
  let conn = match db::try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return db_unavailable(),
  };

  match db::set_entry_active(&conn, id, payload.active) {
    Ok(true) => Json(json!({ "id": id, "active": payload.active })).into_response(),
    Ok(false) => error_response(StatusCode::NOT_FOUND, "Entry not found"),
    Err(e) => {
      tracing::warn!("Failed to toggle entry {}: {}", id, e);
      error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to toggle entry")
    }
  }
}

pub async fn tags(State(pool): State<DbPool>) -> Response {
  let conn = match db::try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return db_unavailable(),
  };

  match db::list_all_tags(&conn) {
    Ok(tags) => Json(tags).into_response(),
    Err(e) => {
      tracing::warn!("Failed to list tags: {}", e);
      error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to list tags")
    }
  }
}
