use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::WordRepetitionRecord;

/// Sentinel returned for entries that were saved without recorded speech
pub const NO_SPEECH_RECORDED: &str = "No speech recorded";

/// Request for POST /api/word-repetition/progress
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveProgressRequest {
    pub user_id: Option<String>,
    pub accuracy: Option<f64>,
    pub words_attempted: Option<i32>,
    pub correct_words: Option<i32>,
    pub user_speech: Option<String>,
    pub target_words: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveProgressResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordRepetitionDto {
    pub accuracy: f64,
    pub words_attempted: i32,
    pub correct_words: i32,
    pub user_speech: String,
    pub target_words: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordRepetitionHistoryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub progress: Vec<WordRepetitionDto>,
}

impl From<WordRepetitionRecord> for WordRepetitionDto {
    fn from(record: WordRepetitionRecord) -> Self {
        Self {
            accuracy: record.accuracy,
            words_attempted: record.words_attempted,
            correct_words: record.correct_words,
            user_speech: record
                .user_speech
                .unwrap_or_else(|| NO_SPEECH_RECORDED.to_string()),
            target_words: record.target_words,
            timestamp: record.created_at,
        }
    }
}
