pub mod lessons;
pub mod lexicon;
pub mod progress;
pub mod quiz;
pub mod settings;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::db::{self, DbPool, LogOnError};

/// Uniform JSON error body
pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
  (status, Json(json!({ "error": message }))).into_response()
}

pub(crate) fn db_unavailable() -> Response {
  error_response(StatusCode::INTERNAL_SERVER_ERROR, "Database unavailable")
}

/// Landing summary: lexicon size, quiz history, available lessons
pub async fn index(State(pool): State<DbPool>) -> Response {
  let conn = match db::try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return db_unavailable(),
  };

  let (total_entries, active_entries) =
    db::count_entries(&conn).log_warn_default("Failed to count entries");
  let tags = db::list_all_tags(&conn).log_warn_default("Failed to list tags");
  let summary = db::get_score_summary(&conn).ok();

  Json(json!({
    "total_entries": total_entries,
    "active_entries": active_entries,
    "tags": tags,
    "quizzes_taken": summary.as_ref().map(|s| s.quizzes_taken).unwrap_or(0),
    "average_percentage": summary.as_ref().map(|s| s.average_percentage()).unwrap_or(0),
    "lessons": crate::lessons::LESSONS.len(),
  }))
  .into_response()
}

pub fn router(pool: DbPool) -> Router {
  Router::new()
    .route("/", get(index))
    .route("/api/lexicon", get(lexicon::list).post(lexicon::create))
    .route(
      "/api/lexicon/{id}",
      get(lexicon::get_one).put(lexicon::update).delete(lexicon::remove),
    )
    .route("/api/lexicon/{id}/active", post(lexicon::set_active))
    .route("/api/tags", get(lexicon::tags))
    .route("/api/quiz/start", post(quiz::start))
    .route("/api/quiz/submit", post(quiz::submit))
    .route("/api/configs", get(settings::list_configs).post(settings::save_config))
    .route("/api/configs/{name}", delete(settings::delete_config))
    .route("/api/settings", get(settings::get_settings).post(settings::update_settings))
    .route("/api/scores", get(progress::recent_scores))
    .route("/api/scores/summary", get(progress::summary))
    .route("/api/lessons", get(lessons::list))
    .route("/api/lessons/{id}", get(lessons::detail))
    .route("/api/lessons/{id}/import", post(lessons::import))
    .layer(TraceLayer::new_for_http())
    .with_state(pool)
}
