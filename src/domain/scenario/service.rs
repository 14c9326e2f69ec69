use super::dto::{AnalyzeResponse, ScenarioDescriptor, ScenarioProgressDto, NOT_AVAILABLE};
use super::error::ScenarioError;
use super::model::ScenarioRecord;
use crate::infrastructure::repositories::{GenerationRepository, UserProgressRepository};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

pub struct ScenarioService {
    generation_repo: Arc<dyn GenerationRepository>,
    progress_repo: Arc<UserProgressRepository>,
}

impl ScenarioService {
    pub fn new(
        generation_repo: Arc<dyn GenerationRepository>,
        progress_repo: Arc<UserProgressRepository>,
    ) -> Self {
        Self {
            generation_repo,
            progress_repo,
        }
    }

    fn analysis_prompt(scenario: &ScenarioDescriptor, response: &str) -> String {
        let word_limit = scenario
            .word_limit
            .map(|limit| limit.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        format!(
            "Analyze the following response based on this scenario:\n\
Scenario: {}\n\
Difficulty: {}\n\
Word Limit: {}\n\n\
Response: {}\n\
Provide constructive feedback.",
            scenario.prompt.as_deref().unwrap_or(NOT_AVAILABLE),
            scenario.difficulty.as_deref().unwrap_or(NOT_AVAILABLE),
            word_limit,
            response,
        )
    }
}

#[async_trait]
pub trait ScenarioServiceApi: Send + Sync {
    /// Ask the model to critique the user's response to a scenario, append
    /// the attempt to the user's progress, and echo the analysis back.
    async fn analyze(
        &self,
        user_id: &str,
        scenario: ScenarioDescriptor,
        response: String,
    ) -> Result<AnalyzeResponse, ScenarioError>;

    async fn progress(&self, user_id: &str) -> Result<Vec<ScenarioProgressDto>, ScenarioError>;
}

#[async_trait]
impl ScenarioServiceApi for ScenarioService {
    async fn analyze(
        &self,
        user_id: &str,
        scenario: ScenarioDescriptor,
        response: String,
    ) -> Result<AnalyzeResponse, ScenarioError> {
        let prompt = Self::analysis_prompt(&scenario, &response);

        let feedback = self
            .generation_repo
            .generate(&prompt)
            .await
            .map_err(ScenarioError::Dependency)?;

        let entry = ScenarioRecord {
            scenario: scenario.prompt.clone(),
            difficulty: scenario.difficulty.clone(),
            response: Some(response.clone()),
            feedback: Some(feedback.clone()),
            created_at: Utc::now(),
        };

        self.progress_repo
            .append_scenario_analysis(user_id, &entry)
            .await
            .map_err(|e| ScenarioError::Dependency(e.to_string()))?;

        Ok(AnalyzeResponse {
            prompt: scenario.prompt,
            difficulty: scenario.difficulty,
            word_limit: scenario.word_limit,
            analyzed_response: response,
            feedback,
        })
    }

    async fn progress(&self, user_id: &str) -> Result<Vec<ScenarioProgressDto>, ScenarioError> {
        let entries = self
            .progress_repo
            .find_scenario_analyses(user_id)
            .await
            .map_err(|e| ScenarioError::Dependency(e.to_string()))?;

        Ok(entries.into_iter().map(ScenarioProgressDto::from).collect())
    }
}
