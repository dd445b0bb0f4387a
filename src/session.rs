//! Simple in-memory storage for running quiz sessions.
//!
//! A session holds the generated question sequence and the settings it was
//! built from, keyed by a random session ID handed to the client at quiz
//! start. Sessions auto-expire after a period of inactivity; abandoning a
//! quiz mid-way simply lets the entry age out.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};

use crate::config;
use crate::domain::{GameSettings, Question};

/// One running quiz
#[derive(Debug, Clone)]
pub struct QuizSession {
  pub questions: Vec<Question>,
  pub settings: GameSettings,
  pub started_at: DateTime<Utc>,
}

impl QuizSession {
  pub fn new(questions: Vec<Question>, settings: GameSettings) -> Self {
    Self {
      questions,
      settings,
      started_at: Utc::now(),
    }
  }
}

/// Session entry with last access time for expiration
struct SessionEntry {
  session: QuizSession,
  last_access: DateTime<Utc>,
}

/// Global session store
static SESSIONS: LazyLock<Mutex<HashMap<String, SessionEntry>>> =
  LazyLock::new(|| Mutex::new(HashMap::new()));

/// Store a new session under a freshly generated ID
pub fn insert_session(session: QuizSession) -> String {
  let session_id = generate_session_id();
  let mut sessions = SESSIONS.lock().expect("Session store lock poisoned");

  // Clean up expired sessions occasionally (~10% chance)
  if rand::random::<u8>() < config::SESSION_CLEANUP_THRESHOLD {
    cleanup_expired(&mut sessions);
  }

  sessions.insert(
    session_id.clone(),
    SessionEntry {
      session,
      last_access: Utc::now(),
    },
  );
  session_id
}

/// Look up a running session by ID
pub fn get_session(session_id: &str) -> Option<QuizSession> {
  let mut sessions = SESSIONS.lock().expect("Session store lock poisoned");

  if let Some(entry) = sessions.get_mut(session_id) {
    entry.last_access = Utc::now();
    Some(entry.session.clone())
  } else {
    None
  }
}

/// Remove a session once the quiz has been submitted
pub fn remove_session(session_id: &str) -> Option<QuizSession> {
  let mut sessions = SESSIONS.lock().expect("Session store lock poisoned");
  sessions.remove(session_id).map(|entry| entry.session)
}

/// Clean up expired sessions
fn cleanup_expired(sessions: &mut HashMap<String, SessionEntry>) {
  let expiry = Utc::now() - Duration::hours(config::SESSION_EXPIRY_HOURS);
  sessions.retain(|_, entry| entry.last_access > expiry);
}

/// Generate a new session ID
pub fn generate_session_id() -> String {
  use rand::Rng;
  let mut rng = rand::rng();
  (0..32)
    .map(|_| {
      let idx = rng.random_range(0..36);
      if idx < 10 {
        (b'0' + idx) as char
      } else {
        (b'a' + idx - 10) as char
      }
    })
    .collect()
}
