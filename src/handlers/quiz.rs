//! Quiz session endpoints: generate a question set, grade a submission.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rusqlite::Connection;
use serde::Deserialize;
use serde_json::json;

use crate::config;
use crate::db::{self, DbPool, LogOnError};
use crate::domain::{Difficulty, GameSettings, InputMode, QuizDirection, QuizLength, QuizType};
use crate::quiz;
use crate::session::{self, QuizSession};

use super::{db_unavailable, error_response};

/// Raw settings-wizard fields as they arrive over the wire
#[derive(Debug, Default, Deserialize)]
pub struct WizardFields {
  pub quiz_type: Option<String>,
  pub direction: Option<String>,
  pub input_mode: Option<String>,
  #[serde(default)]
  pub difficulties: Vec<String>,
  #[serde(default)]
  pub tags: Vec<String>,
  pub length: Option<u32>,
  #[serde(default)]
  pub unlimited: bool,
}

/// Default prompt/answer direction for each quiz mode
fn default_direction(quiz_type: QuizType) -> QuizDirection {
  match quiz_type {
    QuizType::Comprehension => QuizDirection::KoreanToNative,
    QuizType::Writing => QuizDirection::NativeToKorean,
    QuizType::Listening => QuizDirection::KoreanToKorean,
    QuizType::Ordering => QuizDirection::Ordering,
  }
}

/// Validate wizard fields into GameSettings. Invalid settings are rejected
/// here; the builder itself assumes its preconditions hold.
pub(crate) fn parse_wizard(conn: &Connection, fields: WizardFields) -> Result<GameSettings, Response> {
  let quiz_type = match fields.quiz_type.as_deref() {
    Some(s) => match QuizType::from_str(s) {
      Some(t) => t,
      None => {
        return Err(error_response(StatusCode::UNPROCESSABLE_ENTITY, "unknown quiz_type"))
      }
    },
    None => return Err(error_response(StatusCode::UNPROCESSABLE_ENTITY, "quiz_type is required")),
  };

  let direction = match fields.direction.as_deref() {
    Some(s) => match QuizDirection::from_str(s) {
      Some(d) => d,
      None => {
        return Err(error_response(StatusCode::UNPROCESSABLE_ENTITY, "unknown direction"))
      }
    },
    None => default_direction(quiz_type),
  };

  let input_mode = match fields.input_mode.as_deref() {
    Some(s) => match InputMode::from_str(s) {
      Some(m) => m,
      None => {
        return Err(error_response(StatusCode::UNPROCESSABLE_ENTITY, "unknown input_mode"))
      }
    },
    None => db::get_default_input_mode(conn)
      .log_warn("Failed to read default input mode")
      .unwrap_or_default(),
  };

  // Ordering quizzes always reassemble the Korean answer
  let (direction, input_mode) = if quiz_type == QuizType::Ordering {
    (QuizDirection::Ordering, InputMode::Reorder)
  } else {
    (direction, input_mode)
  };

  if fields.difficulties.is_empty() {
    return Err(error_response(
      StatusCode::UNPROCESSABLE_ENTITY,
      "difficulties must not be empty",
    ));
  }
  let mut difficulties = Vec::with_capacity(fields.difficulties.len());
  for s in &fields.difficulties {
    match Difficulty::from_str(s) {
      Some(d) => {
        if !difficulties.contains(&d) {
          difficulties.push(d);
        }
      }
      None => {
        return Err(error_response(StatusCode::UNPROCESSABLE_ENTITY, "unknown difficulty"))
      }
    }
  }

  let length = if fields.unlimited {
    QuizLength::Unlimited
  } else {
    let requested = match fields.length {
      Some(n) => n,
      None => db::get_default_quiz_length(conn)
        .log_warn("Failed to read default length")
        .unwrap_or(config::DEFAULT_QUIZ_LENGTH),
    };
    match QuizLength::from_option(Some(requested)) {
      Some(l) => l,
      None => {
        return Err(error_response(StatusCode::UNPROCESSABLE_ENTITY, "length must be positive"))
      }
    }
  };

  let mut tags = fields.tags;
  tags.retain(|t| !t.trim().is_empty());

  Ok(GameSettings {
    quiz_type,
    direction,
    input_mode,
    difficulties,
    length,
    tags,
  })
}

#[derive(Debug, Deserialize)]
pub struct StartRequest {
  /// Name of a saved configuration; overrides the inline wizard fields
  pub config: Option<String>,
  #[serde(flatten)]
  pub fields: WizardFields,
}

pub async fn start(State(pool): State<DbPool>, Json(request): Json<StartRequest>) -> Response {
  let conn = match db::try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return db_unavailable(),
  };

  let settings = if let Some(name) = &request.config {
    match db::get_config_by_name(&conn, name) {
      Ok(Some(config)) => config.to_settings(),
      Ok(None) => return error_response(StatusCode::NOT_FOUND, "Saved configuration not found"),
      Err(e) => {
        tracing::warn!("Failed to load config {}: {}", name, e);
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load configuration");
      }
    }
  } else {
    match parse_wizard(&conn, request.fields) {
      Ok(settings) => settings,
      Err(response) => return response,
    }
  };

  let pool_entries = match db::fetch_pool(&conn, &settings.difficulties, &settings.tags) {
    Ok(entries) => entries,
    Err(e) => {
      tracing::warn!("Failed to fetch quiz pool: {}", e);
      return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch quiz pool");
    }
  };

  if pool_entries.is_empty() {
    return error_response(StatusCode::NOT_FOUND, "No matching words for these settings");
  }

  let show_phonetic =
    db::get_show_phonetic(&conn).log_warn("Failed to read phonetic setting").unwrap_or(true);
  drop(conn);

  let mut rng = rand::rng();
  let mut questions = quiz::build_questions(&pool_entries, &settings, &mut rng);
  if !show_phonetic {
    for q in &mut questions {
      q.phonetic = None;
    }
  }

  tracing::debug!(
    "Generated {} questions from a pool of {}",
    questions.len(),
    pool_entries.len()
  );

  let session_id = session::insert_session(QuizSession::new(questions.clone(), settings));
  Json(json!({
    "session_id": session_id,
    "total": questions.len(),
    "questions": questions,
  }))
  .into_response()
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
  pub session_id: String,
  pub answers: Vec<String>,
  pub duration_ms: Option<i64>,
}

pub async fn submit(State(pool): State<DbPool>, Json(request): Json<SubmitRequest>) -> Response {
  let quiz_session = match session::remove_session(&request.session_id) {
    Some(s) => s,
    None => return error_response(StatusCode::NOT_FOUND, "Unknown or expired quiz session"),
  };

  let settings = &quiz_session.settings;
  let report = quiz::grade(&quiz_session.questions, &request.answers, settings.input_mode);

  let conn = match db::try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return db_unavailable(),
  };

  db::insert_score(
    &conn,
    settings.quiz_type,
    settings.direction,
    settings.input_mode,
    report.total as i64,
    report.correct as i64,
    &settings.difficulties,
    &settings.tags,
    request.duration_ms,
  )
  .log_warn("Failed to record score");

  Json(json!({
    "total": report.total,
    "correct": report.correct,
    "percentage": report.percentage(),
    "outcomes": report.outcomes,
  }))
  .into_response()
}
