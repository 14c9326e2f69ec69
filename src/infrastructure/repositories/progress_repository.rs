use crate::infrastructure::db::DbPool;
use crate::{
    domain::{
        scenario::ScenarioRecord, voice_assistant::ConversationRecord,
        word_repetition::WordRepetitionRecord,
    },
    error::AppResult,
};
use std::sync::Arc;

/// Gateway to the per-user progress history.
///
/// Each user owns three independent append-only sequences, one table per
/// sequence. An append is a single insert, so there is no read-modify-write
/// window: concurrent appends for the same user both land. Fetches return
/// rows in insertion order and an empty vec for unknown users.
pub struct UserProgressRepository {
    pool: Arc<DbPool>,
}

impl UserProgressRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Append a voice-assistant exchange to the user's conversation history
    pub async fn append_conversation(
        &self,
        user_id: &str,
        entry: &ConversationRecord,
    ) -> AppResult<()> {
        let pool = self.pool.as_ref();
        sqlx::query(
            r#"
            INSERT INTO voice_conversations
                (user_id, user_text, ai_response, speech_synthesized, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user_id)
        .bind(&entry.user_text)
        .bind(&entry.ai_response)
        .bind(entry.speech_synthesized)
        .bind(entry.created_at)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Get a user's conversation history, oldest first
    pub async fn find_conversations(&self, user_id: &str) -> AppResult<Vec<ConversationRecord>> {
        let pool = self.pool.as_ref();
        let entries = sqlx::query_as::<_, ConversationRecord>(
            r#"
            SELECT user_text, ai_response, speech_synthesized, created_at
            FROM voice_conversations
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(entries)
    }

    /// Append a word-repetition practice result
    pub async fn append_word_repetition(
        &self,
        user_id: &str,
        entry: &WordRepetitionRecord,
    ) -> AppResult<()> {
        let pool = self.pool.as_ref();
        sqlx::query(
            r#"
            INSERT INTO word_repetition_progress
                (user_id, accuracy, words_attempted, correct_words, user_speech,
                 target_words, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user_id)
        .bind(entry.accuracy)
        .bind(entry.words_attempted)
        .bind(entry.correct_words)
        .bind(&entry.user_speech)
        .bind(&entry.target_words)
        .bind(entry.created_at)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Get a user's word-repetition history, oldest first
    pub async fn find_word_repetition(
        &self,
        user_id: &str,
    ) -> AppResult<Vec<WordRepetitionRecord>> {
        let pool = self.pool.as_ref();
        let entries = sqlx::query_as::<_, WordRepetitionRecord>(
            r#"
            SELECT accuracy, words_attempted, correct_words, user_speech,
                   target_words, created_at
            FROM word_repetition_progress
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(entries)
    }

    /// Append a scenario analysis result
    pub async fn append_scenario_analysis(
        &self,
        user_id: &str,
        entry: &ScenarioRecord,
    ) -> AppResult<()> {
        let pool = self.pool.as_ref();
        sqlx::query(
            r#"
            INSERT INTO scenario_progress
                (user_id, scenario, difficulty, response, feedback, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user_id)
        .bind(&entry.scenario)
        .bind(&entry.difficulty)
        .bind(&entry.response)
        .bind(&entry.feedback)
        .bind(entry.created_at)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Get a user's scenario analysis history, oldest first
    pub async fn find_scenario_analyses(&self, user_id: &str) -> AppResult<Vec<ScenarioRecord>> {
        let pool = self.pool.as_ref();
        let entries = sqlx::query_as::<_, ScenarioRecord>(
            r#"
            SELECT scenario, difficulty, response, feedback, created_at
            FROM scenario_progress
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(entries)
    }
}
