//! End-to-end API tests against an in-memory database.

use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use wordbank::{db, handlers};

fn server() -> TestServer {
  let conn = rusqlite::Connection::open_in_memory().expect("open in-memory db");
  db::run_migrations(&conn).expect("migrations");
  let pool = Arc::new(Mutex::new(conn));
  TestServer::new(handlers::router(pool)).expect("test server")
}

async fn add_entry(server: &TestServer, native: &str, korean: &str, difficulty: &str, tags: &[&str]) -> i64 {
  let response = server
    .post("/api/lexicon")
    .json(&json!({
      "native": native,
      "korean": korean,
      "difficulty": difficulty,
      "tags": tags,
    }))
    .await;
  response.assert_status(StatusCode::CREATED);
  response.json::<Value>()["id"].as_i64().unwrap()
}

#[tokio::test]
async fn index_reports_lexicon_summary() {
  let server = server();
  add_entry(&server, "water", "물", "easy", &[]).await;

  let response = server.get("/").await;
  response.assert_status_ok();
  let body: Value = response.json();
  assert_eq!(body["total_entries"], 1);
  assert_eq!(body["active_entries"], 1);
  assert_eq!(body["quizzes_taken"], 0);
}

#[tokio::test]
async fn lexicon_crud_roundtrip() {
  let server = server();
  let id = add_entry(&server, "water", "물", "easy", &["basics"]).await;

  // Read
  let response = server.get(&format!("/api/lexicon/{}", id)).await;
  response.assert_status_ok();
  let body: Value = response.json();
  assert_eq!(body["korean"], "물");
  assert_eq!(body["tags"], json!(["basics"]));

  // Update
  let response = server
    .put(&format!("/api/lexicon/{}", id))
    .json(&json!({
      "native": "water",
      "korean": "물",
      "phonetic": "mul",
      "difficulty": "medium",
      "tags": ["basics", "nature"],
    }))
    .await;
  response.assert_status_ok();
  let body: Value = response.json();
  assert_eq!(body["difficulty"], "medium");
  assert_eq!(body["phonetic"], "mul");

  // Delete
  server.delete(&format!("/api/lexicon/{}", id)).await.assert_status_ok();
  server
    .get(&format!("/api/lexicon/{}", id))
    .await
    .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn lexicon_rejects_invalid_payloads() {
  let server = server();

  let response = server
    .post("/api/lexicon")
    .json(&json!({ "native": "water", "korean": "물", "difficulty": "impossible" }))
    .await;
  response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

  let response = server
    .post("/api/lexicon")
    .json(&json!({ "native": "  ", "korean": "물", "difficulty": "easy" }))
    .await;
  response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn deactivated_entries_are_hidden_from_default_listing() {
  let server = server();
  let id = add_entry(&server, "water", "물", "easy", &[]).await;
  add_entry(&server, "fire", "불", "easy", &[]).await;

  let response = server
    .post(&format!("/api/lexicon/{}/active", id))
    .json(&json!({ "active": false }))
    .await;
  response.assert_status_ok();

  let listed: Value = server.get("/api/lexicon").await.json();
  assert_eq!(listed.as_array().unwrap().len(), 1);

  let all: Value = server
    .get("/api/lexicon")
    .add_query_param("include_inactive", "true")
    .await
    .json();
  assert_eq!(all.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn tags_endpoint_lists_distinct_tags() {
  let server = server();
  add_entry(&server, "water", "물", "easy", &["nature", "basics"]).await;
  add_entry(&server, "fire", "불", "easy", &["nature"]).await;

  let tags: Value = server.get("/api/tags").await.json();
  assert_eq!(tags, json!(["basics", "nature"]));
}

#[tokio::test]
async fn quiz_start_and_submit_records_score() {
  let server = server();
  for (native, korean) in [("water", "물"), ("fire", "불"), ("dog", "개"), ("cat", "고양이"), ("book", "책")] {
    add_entry(&server, native, korean, "easy", &[]).await;
  }

  let response = server
    .post("/api/quiz/start")
    .json(&json!({
      "quiz_type": "writing",
      "input_mode": "multiple_choice",
      "difficulties": ["easy"],
      "length": 3,
    }))
    .await;
  response.assert_status_ok();
  let body: Value = response.json();
  assert_eq!(body["total"], 3);
  let questions = body["questions"].as_array().unwrap();
  assert_eq!(questions.len(), 3);
  for q in questions {
    let choices = q["choices"].as_array().unwrap();
    assert_eq!(choices.len(), 4);
    assert!(choices.contains(&q["correct_answer"]));
  }

  // Answer every question correctly
  let answers: Vec<String> = questions
    .iter()
    .map(|q| q["correct_answer"].as_str().unwrap().to_string())
    .collect();
  let response = server
    .post("/api/quiz/submit")
    .json(&json!({
      "session_id": body["session_id"],
      "answers": answers,
      "duration_ms": 61_000,
    }))
    .await;
  response.assert_status_ok();
  let report: Value = response.json();
  assert_eq!(report["correct"], 3);
  assert_eq!(report["percentage"], 100);

  // The finished quiz shows up in the score history
  let scores: Value = server.get("/api/scores").await.json();
  let scores = scores.as_array().unwrap();
  assert_eq!(scores.len(), 1);
  assert_eq!(scores[0]["percentage"], 100);
  assert_eq!(scores[0]["quiz_type"], "writing");

  let summary: Value = server.get("/api/scores/summary").await.json();
  assert_eq!(summary["quizzes_taken"], 1);
  assert_eq!(summary["best_percentage"], 100);
}

#[tokio::test]
async fn quiz_session_is_single_use() {
  let server = server();
  add_entry(&server, "water", "물", "easy", &[]).await;

  let body: Value = server
    .post("/api/quiz/start")
    .json(&json!({
      "quiz_type": "writing",
      "input_mode": "free_text",
      "difficulties": ["easy"],
      "length": 1,
    }))
    .await
    .json();

  let submit = json!({ "session_id": body["session_id"], "answers": ["물"] });
  server.post("/api/quiz/submit").json(&submit).await.assert_status_ok();
  server
    .post("/api/quiz/submit")
    .json(&submit)
    .await
    .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn quiz_start_with_empty_pool_is_reported() {
  let server = server();
  add_entry(&server, "economy", "경제", "hard", &[]).await;

  let response = server
    .post("/api/quiz/start")
    .json(&json!({
      "quiz_type": "writing",
      "difficulties": ["easy"],
      "length": 5,
    }))
    .await;
  response.assert_status(StatusCode::NOT_FOUND);
  let body: Value = response.json();
  assert!(body["error"].as_str().unwrap().contains("No matching words"));
}

#[tokio::test]
async fn quiz_start_rejects_invalid_settings() {
  let server = server();
  add_entry(&server, "water", "물", "easy", &[]).await;

  // Empty difficulties
  server
    .post("/api/quiz/start")
    .json(&json!({ "quiz_type": "writing", "difficulties": [], "length": 5 }))
    .await
    .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

  // Unknown quiz type
  server
    .post("/api/quiz/start")
    .json(&json!({ "quiz_type": "osmosis", "difficulties": ["easy"], "length": 5 }))
    .await
    .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

  // Zero length
  server
    .post("/api/quiz/start")
    .json(&json!({ "quiz_type": "writing", "difficulties": ["easy"], "length": 0 }))
    .await
    .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn quiz_unlimited_uses_each_entry_once() {
  let server = server();
  for (native, korean) in [("water", "물"), ("fire", "불"), ("dog", "개")] {
    add_entry(&server, native, korean, "easy", &[]).await;
  }

  let body: Value = server
    .post("/api/quiz/start")
    .json(&json!({
      "quiz_type": "comprehension",
      "input_mode": "free_text",
      "difficulties": ["easy"],
      "unlimited": true,
    }))
    .await
    .json();

  assert_eq!(body["total"], 3);
  let questions = body["questions"].as_array().unwrap();
  let mut prompts: Vec<&str> = questions.iter().map(|q| q["prompt"].as_str().unwrap()).collect();
  prompts.sort();
  prompts.dedup();
  assert_eq!(prompts.len(), 3);
  // Free text carries no choices
  assert!(questions.iter().all(|q| q.get("choices").is_none()));
}

#[tokio::test]
async fn quiz_respects_tag_filter() {
  let server = server();
  add_entry(&server, "dog", "개", "easy", &["animals"]).await;
  add_entry(&server, "water", "물", "easy", &["nature"]).await;

  let body: Value = server
    .post("/api/quiz/start")
    .json(&json!({
      "quiz_type": "writing",
      "input_mode": "free_text",
      "difficulties": ["easy"],
      "tags": ["animals"],
      "unlimited": true,
    }))
    .await
    .json();

  assert_eq!(body["total"], 1);
  assert_eq!(body["questions"][0]["correct_answer"], "개");
}

#[tokio::test]
async fn saved_config_drives_a_quiz() {
  let server = server();
  add_entry(&server, "water", "물", "easy", &[]).await;
  add_entry(&server, "fire", "불", "easy", &[]).await;

  let response = server
    .post("/api/configs")
    .json(&json!({
      "name": "morning-drill",
      "quiz_type": "comprehension",
      "input_mode": "free_text",
      "difficulties": ["easy"],
      "unlimited": true,
    }))
    .await;
  response.assert_status(StatusCode::CREATED);

  let configs: Value = server.get("/api/configs").await.json();
  assert_eq!(configs.as_array().unwrap().len(), 1);
  assert_eq!(configs[0]["name"], "morning-drill");
  assert_eq!(configs[0]["length"], Value::Null);

  let body: Value = server
    .post("/api/quiz/start")
    .json(&json!({ "config": "morning-drill" }))
    .await
    .json();
  assert_eq!(body["total"], 2);

  server
    .delete("/api/configs/morning-drill")
    .await
    .assert_status_ok();
  server
    .post("/api/quiz/start")
    .json(&json!({ "config": "morning-drill" }))
    .await
    .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn settings_roundtrip_and_defaults_apply() {
  let server = server();

  let settings: Value = server.get("/api/settings").await.json();
  assert_eq!(settings["default_quiz_length"], 10);
  assert_eq!(settings["show_phonetic"], true);

  let response = server
    .post("/api/settings")
    .json(&json!({ "default_quiz_length": 2, "show_phonetic": false }))
    .await;
  response.assert_status_ok();

  // Quiz start without an explicit length uses the stored default, and
  // phonetic hints are stripped when disabled
  for (native, korean, phonetic) in [("water", "물", "mul"), ("fire", "불", "bul"), ("dog", "개", "gae")] {
    server
      .post("/api/lexicon")
      .json(&json!({
        "native": native,
        "korean": korean,
        "phonetic": phonetic,
        "difficulty": "easy",
      }))
      .await
      .assert_status(StatusCode::CREATED);
  }

  let body: Value = server
    .post("/api/quiz/start")
    .json(&json!({
      "quiz_type": "writing",
      "input_mode": "free_text",
      "difficulties": ["easy"],
    }))
    .await
    .json();
  assert_eq!(body["total"], 2);
  assert!(body["questions"][0]["phonetic"].is_null());
}

#[tokio::test]
async fn settings_rejects_unknown_input_mode() {
  let server = server();
  server
    .post("/api/settings")
    .json(&json!({ "default_input_mode": "telepathy" }))
    .await
    .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn lessons_can_be_browsed_and_imported() {
  let server = server();

  let lessons: Value = server.get("/api/lessons").await.json();
  assert_eq!(lessons.as_array().unwrap().len(), 3);

  let detail: Value = server.get("/api/lessons/food").await.json();
  assert_eq!(detail["tag"], "food");
  let word_count = detail["words"].as_array().unwrap().len();
  assert!(word_count > 0);

  let response = server.post("/api/lessons/food/import").await;
  response.assert_status_ok();
  let body: Value = response.json();
  assert_eq!(body["imported"], word_count);

  // Imported words land in the lexicon, tagged with the lesson tag
  let entries: Value = server.get("/api/lexicon").await.json();
  assert_eq!(entries.as_array().unwrap().len(), word_count);

  // Re-import skips everything
  let body: Value = server.post("/api/lessons/food/import").await.json();
  assert_eq!(body["imported"], 0);

  server
    .get("/api/lessons/nope")
    .await
    .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ordering_quiz_forces_reorder_input() {
  let server = server();
  add_entry(&server, "hello", "안녕하세요", "medium", &[]).await;

  let body: Value = server
    .post("/api/quiz/start")
    .json(&json!({
      "quiz_type": "ordering",
      "input_mode": "multiple_choice",
      "difficulties": ["medium"],
      "unlimited": true,
    }))
    .await
    .json();

  // Ordering quizzes reassemble the Korean answer; no choice list even
  // though the request asked for multiple choice
  let question = &body["questions"][0];
  assert_eq!(question["prompt"], "hello");
  assert_eq!(question["correct_answer"], "안녕하세요");
  assert!(question.get("choices").is_none());
}
