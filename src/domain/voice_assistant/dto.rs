use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::ConversationRecord;

/// Request for POST /api/voice-assistant.
/// Fields are optional so missing keys surface as a 400 from handler
/// validation rather than a deserialization rejection.
#[derive(Debug, Serialize, Deserialize)]
pub struct VoiceAssistantRequest {
    pub user_id: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VoiceAssistantResponse {
    pub response: String,
    pub speech_synthesized: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConversationDto {
    pub user_text: String,
    pub ai_response: String,
    pub timestamp: DateTime<Utc>,
    pub speech_synthesized: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConversationHistoryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub conversations: Vec<ConversationDto>,
}

impl From<ConversationRecord> for ConversationDto {
    fn from(record: ConversationRecord) -> Self {
        Self {
            user_text: record.user_text,
            ai_response: record.ai_response,
            timestamp: record.created_at,
            speech_synthesized: record.speech_synthesized,
        }
    }
}
