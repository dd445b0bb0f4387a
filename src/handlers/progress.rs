//! Score history endpoints.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::config;
use crate::db::{self, DbPool, ScoreRecord};

use super::{db_unavailable, error_response};

#[derive(Debug, Deserialize)]
pub struct ScoresQuery {
  pub limit: Option<i64>,
}

fn score_json(score: &ScoreRecord) -> serde_json::Value {
  json!({
    "id": score.id,
    "quiz_type": score.quiz_type.as_str(),
    "direction": score.direction.as_str(),
    "input_mode": score.input_mode.as_str(),
    "total_questions": score.total_questions,
    "correct_answers": score.correct_answers,
    "percentage": score.percentage(),
    "difficulties": score.difficulties,
    "tags": score.tags,
    "duration_ms": score.duration_ms,
    "taken_at": score.taken_at.to_rfc3339(),
  })
}

pub async fn recent_scores(State(pool): State<DbPool>, Query(query): Query<ScoresQuery>) -> Response {
  let limit = query.limit.unwrap_or(config::RECENT_SCORES_LIMIT).clamp(1, 500);

  let conn = match db::try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return db_unavailable(),
  };

  match db::get_recent_scores(&conn, limit) {
    Ok(scores) => {
      let body: Vec<serde_json::Value> = scores.iter().map(score_json).collect();
      Json(body).into_response()
    }
    Err(e) => {
      tracing::warn!("Failed to load score history: {}", e);
      error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load score history")
    }
  }
}

pub async fn summary(State(pool): State<DbPool>) -> Response {
  let conn = match db::try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return db_unavailable(),
  };

  match db::get_score_summary(&conn) {
    Ok(summary) => Json(json!({
      "quizzes_taken": summary.quizzes_taken,
      "questions_answered": summary.questions_answered,
      "correct_answers": summary.correct_answers,
      "best_percentage": summary.best_percentage,
      "average_percentage": summary.average_percentage(),
    }))
    .into_response(),
    Err(e) => {
      tracing::warn!("Failed to load score summary: {}", e);
      error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load score summary")
    }
  }
}
