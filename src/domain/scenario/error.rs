use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for ScenarioError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => ScenarioError::Invalid(msg),
            _ => ScenarioError::Dependency(err.to_string()),
        }
    }
}

impl From<ScenarioError> for AppError {
    fn from(err: ScenarioError) -> Self {
        match err {
            ScenarioError::Invalid(msg) => AppError::BadRequest(msg),
            ScenarioError::Dependency(msg) => AppError::ExternalService(msg),
            ScenarioError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
