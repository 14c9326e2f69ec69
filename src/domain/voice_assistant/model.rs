use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One voice-assistant exchange in a user's conversation history
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ConversationRecord {
    pub user_text: String,
    pub ai_response: String,
    pub speech_synthesized: bool,
    pub created_at: DateTime<Utc>,
}
