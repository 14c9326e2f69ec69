use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::word_repetition::{
        SaveProgressRequest, SaveProgressResponse, WordRepetitionHistoryResponse,
        WordRepetitionInput, WordRepetitionService, WordRepetitionServiceApi,
    },
    error::{AppError, AppResult},
};

pub struct WordRepetitionController {
    service: Arc<WordRepetitionService>,
}

impl WordRepetitionController {
    pub fn new(service: Arc<WordRepetitionService>) -> Self {
        Self { service }
    }

    /// POST /api/word-repetition/progress - Save one practice result
    pub async fn save(
        State(controller): State<Arc<WordRepetitionController>>,
        Json(request): Json<SaveProgressRequest>,
    ) -> AppResult<Json<SaveProgressResponse>> {
        let user_id = request.user_id.as_deref().filter(|s| !s.is_empty());

        let (user_id, accuracy, words_attempted, correct_words) = match (
            user_id,
            request.accuracy,
            request.words_attempted,
            request.correct_words,
        ) {
            (Some(user_id), Some(accuracy), Some(words_attempted), Some(correct_words)) => {
                (user_id, accuracy, words_attempted, correct_words)
            }
            _ => return Err(AppError::BadRequest("Missing required fields".to_string())),
        };

        let input = WordRepetitionInput {
            accuracy,
            words_attempted,
            correct_words,
            user_speech: request.user_speech,
            target_words: request.target_words.unwrap_or_default(),
        };

        controller.service.record(user_id, input).await?;

        Ok(Json(SaveProgressResponse {
            message: "Progress saved successfully".to_string(),
        }))
    }

    /// GET /api/word-repetition/progress/{user_id} - Practice history
    pub async fn history(
        State(controller): State<Arc<WordRepetitionController>>,
        Path(user_id): Path<String>,
    ) -> AppResult<Json<WordRepetitionHistoryResponse>> {
        let progress = controller.service.history(&user_id).await?;

        let message = progress
            .is_empty()
            .then(|| "No progress found for this user".to_string());

        Ok(Json(WordRepetitionHistoryResponse { message, progress }))
    }
}
