use super::generation_repository::GenerationRepository;
use async_openai::{
    config::OpenAIConfig,
    types::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

/// OpenAI chat-completions implementation of the generation repository
pub struct OpenAiGenerationRepository {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
}

impl OpenAiGenerationRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String) -> Self {
        Self { client, model }
    }
}

#[async_trait]
impl GenerationRepository for OpenAiGenerationRepository {
    async fn generate(&self, prompt: &str) -> Result<String, String> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            model = %self.model,
            prompt_length = prompt.len(),
            "Calling OpenAI chat completion"
        );

        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| format!("OpenAI request error: {}", e))?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([message.into()])
            .build()
            .map_err(|e| format!("OpenAI request error: {}", e))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                model = %self.model,
                prompt_length = prompt.len(),
                "OpenAI chat completion failed"
            );
            format!("AI generation failed: {}", e)
        })?;

        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| "AI generation failed: empty response".to_string())?;

        tracing::info!(
            model = %self.model,
            latency_ms = start_time.elapsed().as_millis(),
            response_length = text.len(),
            "Chat completion received"
        );

        Ok(text)
    }
}
