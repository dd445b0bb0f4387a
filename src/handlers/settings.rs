//! Application settings and saved quiz configurations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::db::{self, DbPool, SavedQuizConfig};
use crate::domain::InputMode;

use super::quiz::{parse_wizard, WizardFields};
use super::{db_unavailable, error_response};

pub async fn get_settings(State(pool): State<DbPool>) -> Response {
  let conn = match db::try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return db_unavailable(),
  };

  let length = db::get_default_quiz_length(&conn).unwrap_or(crate::config::DEFAULT_QUIZ_LENGTH);
  let input_mode = db::get_default_input_mode(&conn).unwrap_or(InputMode::MultipleChoice);
  let show_phonetic = db::get_show_phonetic(&conn).unwrap_or(true);

  Json(json!({
    "default_quiz_length": length,
    "default_input_mode": input_mode.as_str(),
    "show_phonetic": show_phonetic,
  }))
  .into_response()
}

#[derive(Debug, Deserialize)]
pub struct SettingsPayload {
  pub default_quiz_length: Option<u32>,
  pub default_input_mode: Option<String>,
  pub show_phonetic: Option<bool>,
}

pub async fn update_settings(
  State(pool): State<DbPool>,
  Json(payload): Json<SettingsPayload>,
) -> Response {
  let input_mode = match payload.default_input_mode.as_deref() {
    Some(s) => match InputMode::from_str(s) {
      Some(m) => Some(m),
      None => return error_response(StatusCode::UNPROCESSABLE_ENTITY, "unknown input_mode"),
    },
    None => None,
  };
  if payload.default_quiz_length == Some(0) {
    return error_response(StatusCode::UNPROCESSABLE_ENTITY, "length must be positive");
  }

  let conn = match db::try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return db_unavailable(),
  };

  if let Some(length) = payload.default_quiz_length {
    if let Err(e) = db::set_default_quiz_length(&conn, length) {
      tracing::warn!("Failed to store quiz length: {}", e);
      return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to store settings");
    }
  }
  if let Some(mode) = input_mode {
    if let Err(e) = db::set_default_input_mode(&conn, mode) {
      tracing::warn!("Failed to store input mode: {}", e);
      return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to store settings");
    }
  }
  if let Some(enabled) = payload.show_phonetic {
    if let Err(e) = db::set_show_phonetic(&conn, enabled) {
      tracing::warn!("Failed to store phonetic setting: {}", e);
      return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to store settings");
    }
  }

  Json(json!({ "updated": true })).into_response()
}

fn config_json(config: &SavedQuizConfig) -> serde_json::Value {
  json!({
    "name": config.name,
    "quiz_type": config.quiz_type.as_str(),
    "direction": config.direction.as_str(),
    "input_mode": config.input_mode.as_str(),
    "difficulties": config.difficulties,
    "tags": config.tags,
    "length": config.length.to_option(),
  })
}

pub async fn list_configs(State(pool): State<DbPool>) -> Response {
  let conn = match db::try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return db_unavailable(),
  };

  match db::list_configs(&conn) {
    Ok(configs) => {
      let body: Vec<serde_json::Value> = configs.iter().map(config_json).collect();
      Json(body).into_response()
    }
    Err(e) => {
      tracing::warn!("Failed to list configs: {}", e);
      error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to list configurations")
    }
  }
}

#[derive(Debug, Deserialize)]
pub struct SaveConfigRequest {
  pub name: String,
  #[serde(flatten)]
  pub fields: WizardFields,
}

pub async fn save_config(
  State(pool): State<DbPool>,
  Json(request): Json<SaveConfigRequest>,
) -> Response {
  let name = request.name.trim().to_string();
  if name.is_empty() {
    return error_response(StatusCode::UNPROCESSABLE_ENTITY, "name must not be empty");
  }

  let conn = match db::try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return db_unavailable(),
  };

  let settings = match parse_wizard(&conn, request.fields) {
    Ok(settings) => settings,
    Err(response) => return response,
  };

  match db::save_config(&conn, &name, &settings) {
    Ok(_) => match db::get_config_by_name(&conn, &name) {
      Ok(Some(config)) => (StatusCode::CREATED, Json(config_json(&config))).into_response(),
      _ => error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to read saved configuration"),
    },
    Err(e) => {
      tracing::warn!("Failed to save config {}: {}", name, e);
      error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save configuration")
    }
  }
}

pub async fn delete_config(State(pool): State<DbPool>, Path(name): Path<String>) -> Response {
  let conn = match db::try_lock(&pool) {
    Ok(conn) => conn,
    Err(_) => return db_unavailable(),
  };

  match db::delete_config(&conn, &name) {
    Ok(true) => Json(json!({ "deleted": true })).into_response(),
    Ok(false) => error_response(StatusCode::NOT_FOUND, "Configuration not found"),
    Err(e) => {
      tracing::warn!("Failed to delete config {}: {}", name, e);
      error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete configuration")
    }
  }
}
