//! Built-in lesson browsing and import.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::{self, DbPool};
use crate::lessons;

use super::{db_unavailable, error_response};

fn lesson_summary(lesson: &lessons::Lesson) -> serde_json::Value {
  json!({
    "id": lesson.id,
    "title": lesson.title,
    "description": lesson.description,
    "tag": lesson.tag,
    "word_count": lesson.words.len(),
  })
}

pub async fn list() -> Response {
  let body: Vec<serde_json::Value> = lessons::LESSONS.iter().map(lesson_summary).collect();
  Json(body).into_response()
}

pub async fn detail(Path(id): Path<String>) -> Response {
  let lesson = match lessons::get_lesson(&id) {
    Some(lesson) => lesson,
    None => return error_response(StatusCode::NOT_FOUND, "Lesson not found"),
  };

  let words: Vec<serde_json::Value> = lesson
    .words
    .iter()
    .map(|w| {
      json!({
        "native": w.native,
        "korean": w.korean,
        "phonetic": w.phonetic,
        "difficulty": w.difficulty.as_str(),
      })
    })
    .collect();

  Json(json!({
    "id": lesson.id,
    "title": lesson.title,
    "description": lesson.description,
    "tag": lesson.tag,
    "words": words,
  }))
  .into_response()
}

pub async fn import(State(pool): State<DbPool>, Path(id): Path<String>) -> Response {
  let lesson = match lessons::get_lesson(&id) {
    Some(lesson) => lesson,
    None => return error_response(StatusCode::NOT_FOUND, "Lesson not found"),
  };

  let conn = match db::try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return db_unavailable(),
  };

  match lessons::import_lesson(&conn, lesson) {
    Ok(imported) => Json(json!({
      "lesson": lesson.id,
      "imported": imported,
      "skipped": lesson.words.len() - imported,
    }))
    .into_response(),
    Err(e) => {
      tracing::warn!("Failed to import lesson {}: {}", lesson.id, e);
      error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to import lesson")
    }
  }
}
