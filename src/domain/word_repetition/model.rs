use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One word-repetition practice result.
///
/// `user_speech` is NULL when the client recorded no speech; reads default
/// it at the DTO boundary, the stored row keeps the absence.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WordRepetitionRecord {
    pub accuracy: f64,
    pub words_attempted: i32,
    pub correct_words: i32,
    pub user_speech: Option<String>,
    pub target_words: Vec<String>,
    pub created_at: DateTime<Utc>,
}
