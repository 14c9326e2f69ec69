use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::scenario::{
        AnalyzeRequest, AnalyzeResponse, ScenarioProgressResponse, ScenarioService,
        ScenarioServiceApi,
    },
    error::{AppError, AppResult},
};

pub struct ScenarioController {
    service: Arc<ScenarioService>,
}

impl ScenarioController {
    pub fn new(service: Arc<ScenarioService>) -> Self {
        Self { service }
    }

    /// POST /api/analyze - Analyze a scenario response and record it
    pub async fn analyze(
        State(controller): State<Arc<ScenarioController>>,
        Json(request): Json<AnalyzeRequest>,
    ) -> AppResult<Json<AnalyzeResponse>> {
        let user_id = request
            .user_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::BadRequest("User ID is required".to_string()))?;

        let scenario = request.scenario.unwrap_or_default();
        let response = request.response.unwrap_or_default();

        let analysis = controller
            .service
            .analyze(user_id, scenario, response)
            .await?;

        Ok(Json(analysis))
    }

    /// GET /api/progress/{user_id} - Scenario analysis history
    pub async fn progress(
        State(controller): State<Arc<ScenarioController>>,
        Path(user_id): Path<String>,
    ) -> AppResult<Json<ScenarioProgressResponse>> {
        let progress = controller.service.progress(&user_id).await?;

        let message = progress
            .is_empty()
            .then(|| "No progress found for this user".to_string());

        Ok(Json(ScenarioProgressResponse { message, progress }))
    }
}
