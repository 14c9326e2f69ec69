use super::dto::WordRepetitionDto;
use super::error::WordRepetitionError;
use super::model::WordRepetitionRecord;
use crate::infrastructure::repositories::UserProgressRepository;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

/// Validated write-path input for one practice result
#[derive(Debug, Clone)]
pub struct WordRepetitionInput {
    pub accuracy: f64,
    pub words_attempted: i32,
    pub correct_words: i32,
    pub user_speech: Option<String>,
    pub target_words: Vec<String>,
}

pub struct WordRepetitionService {
    progress_repo: Arc<UserProgressRepository>,
}

impl WordRepetitionService {
    pub fn new(progress_repo: Arc<UserProgressRepository>) -> Self {
        Self { progress_repo }
    }
}

#[async_trait]
pub trait WordRepetitionServiceApi: Send + Sync {
    async fn record(
        &self,
        user_id: &str,
        input: WordRepetitionInput,
    ) -> Result<(), WordRepetitionError>;

    async fn history(&self, user_id: &str)
        -> Result<Vec<WordRepetitionDto>, WordRepetitionError>;
}

#[async_trait]
impl WordRepetitionServiceApi for WordRepetitionService {
    async fn record(
        &self,
        user_id: &str,
        input: WordRepetitionInput,
    ) -> Result<(), WordRepetitionError> {
        let entry = WordRepetitionRecord {
            accuracy: input.accuracy,
            words_attempted: input.words_attempted,
            correct_words: input.correct_words,
            user_speech: input.user_speech,
            target_words: input.target_words,
            created_at: Utc::now(),
        };

        self.progress_repo
            .append_word_repetition(user_id, &entry)
            .await
            .map_err(|e| WordRepetitionError::Dependency(e.to_string()))?;

        tracing::debug!(
            user_id = %user_id,
            accuracy = entry.accuracy,
            words_attempted = entry.words_attempted,
            "Word repetition progress saved"
        );

        Ok(())
    }

    async fn history(
        &self,
        user_id: &str,
    ) -> Result<Vec<WordRepetitionDto>, WordRepetitionError> {
        let entries = self
            .progress_repo
            .find_word_repetition(user_id)
            .await
            .map_err(|e| WordRepetitionError::Dependency(e.to_string()))?;

        Ok(entries.into_iter().map(WordRepetitionDto::from).collect())
    }
}
