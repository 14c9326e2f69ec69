use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum VoiceAssistantError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for VoiceAssistantError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => VoiceAssistantError::Invalid(msg),
            _ => VoiceAssistantError::Dependency(err.to_string()),
        }
    }
}

impl From<VoiceAssistantError> for AppError {
    fn from(err: VoiceAssistantError) -> Self {
        match err {
            VoiceAssistantError::Invalid(msg) => AppError::BadRequest(msg),
            VoiceAssistantError::Dependency(msg) => AppError::ExternalService(msg),
            VoiceAssistantError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
