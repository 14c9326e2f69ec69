use super::error::VoiceAssistantError;
use super::model::ConversationRecord;
use super::{dto::ConversationDto, prompt};
use crate::infrastructure::repositories::{GenerationRepository, UserProgressRepository};
use crate::infrastructure::speech::SpeechDispatcher;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

/// Outcome of one assistant exchange. `speech_synthesized` reflects dispatch
/// success only, never audio completion.
#[derive(Debug, Clone)]
pub struct AssistantReply {
    pub response: String,
    pub speech_synthesized: bool,
}

pub struct VoiceAssistantService {
    generation_repo: Arc<dyn GenerationRepository>,
    progress_repo: Arc<UserProgressRepository>,
    speech: Arc<SpeechDispatcher>,
}

impl VoiceAssistantService {
    pub fn new(
        generation_repo: Arc<dyn GenerationRepository>,
        progress_repo: Arc<UserProgressRepository>,
        speech: Arc<SpeechDispatcher>,
    ) -> Self {
        Self {
            generation_repo,
            progress_repo,
            speech,
        }
    }
}

#[async_trait]
pub trait VoiceAssistantServiceApi: Send + Sync {
    /// Generate a reply for the user's message, speak it on the host, and
    /// append the exchange to the user's history.
    ///
    /// Generation and persistence are sequential with no transaction between
    /// them: a persistence failure after a successful generation loses the
    /// reply, and no compensating action is taken.
    async fn respond(&self, user_id: &str, text: &str)
        -> Result<AssistantReply, VoiceAssistantError>;

    async fn history(&self, user_id: &str) -> Result<Vec<ConversationDto>, VoiceAssistantError>;
}

#[async_trait]
impl VoiceAssistantServiceApi for VoiceAssistantService {
    async fn respond(
        &self,
        user_id: &str,
        text: &str,
    ) -> Result<AssistantReply, VoiceAssistantError> {
        let prompt = prompt::assistant_prompt(text);

        let ai_response = self
            .generation_repo
            .generate(&prompt)
            .await
            .map_err(VoiceAssistantError::Dependency)?;

        tracing::debug!(
            user_id = %user_id,
            response_length = ai_response.len(),
            "Assistant reply generated"
        );

        // Fire-and-forget: true means scheduled, not spoken
        let speech_synthesized = self.speech.dispatch(&ai_response);

        let entry = ConversationRecord {
            user_text: text.to_string(),
            ai_response: ai_response.clone(),
            speech_synthesized,
            created_at: Utc::now(),
        };

        self.progress_repo
            .append_conversation(user_id, &entry)
            .await
            .map_err(|e| VoiceAssistantError::Dependency(e.to_string()))?;

        Ok(AssistantReply {
            response: ai_response,
            speech_synthesized,
        })
    }

    async fn history(&self, user_id: &str) -> Result<Vec<ConversationDto>, VoiceAssistantError> {
        let entries = self
            .progress_repo
            .find_conversations(user_id)
            .await
            .map_err(|e| VoiceAssistantError::Dependency(e.to_string()))?;

        Ok(entries.into_iter().map(ConversationDto::from).collect())
    }
}
