use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum WordRepetitionError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for WordRepetitionError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => WordRepetitionError::Invalid(msg),
            _ => WordRepetitionError::Dependency(err.to_string()),
        }
    }
}

impl From<WordRepetitionError> for AppError {
    fn from(err: WordRepetitionError) -> Self {
        match err {
            WordRepetitionError::Invalid(msg) => AppError::BadRequest(msg),
            WordRepetitionError::Dependency(msg) => AppError::ExternalService(msg),
            WordRepetitionError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
