use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::voice_assistant::{
        ConversationHistoryResponse, VoiceAssistantRequest, VoiceAssistantResponse,
        VoiceAssistantService, VoiceAssistantServiceApi,
    },
    error::{AppError, AppResult},
};

pub struct VoiceAssistantController {
    service: Arc<VoiceAssistantService>,
}

impl VoiceAssistantController {
    pub fn new(service: Arc<VoiceAssistantService>) -> Self {
        Self { service }
    }

    /// POST /api/voice-assistant - Generate and speak an assistant reply
    pub async fn chat(
        State(controller): State<Arc<VoiceAssistantController>>,
        Json(request): Json<VoiceAssistantRequest>,
    ) -> AppResult<Json<VoiceAssistantResponse>> {
        let user_id = request.user_id.as_deref().filter(|s| !s.is_empty());
        let text = request.text.as_deref().filter(|s| !s.is_empty());

        let (user_id, text) = match (user_id, text) {
            (Some(user_id), Some(text)) => (user_id, text),
            _ => {
                return Err(AppError::BadRequest(
                    "User ID and text are required".to_string(),
                ))
            }
        };

        let reply = controller.service.respond(user_id, text).await?;

        Ok(Json(VoiceAssistantResponse {
            response: reply.response,
            speech_synthesized: reply.speech_synthesized,
        }))
    }

    /// GET /api/voice-assistant/history/{user_id} - Conversation history
    pub async fn history(
        State(controller): State<Arc<VoiceAssistantController>>,
        Path(user_id): Path<String>,
    ) -> AppResult<Json<ConversationHistoryResponse>> {
        let conversations = controller.service.history(&user_id).await?;

        let message = conversations
            .is_empty()
            .then(|| "No conversations found".to_string());

        Ok(Json(ConversationHistoryResponse {
            message,
            conversations,
        }))
    }
}
