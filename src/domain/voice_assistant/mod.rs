pub mod dto;
pub mod error;
pub mod model;
pub mod prompt;
pub mod service;

pub use dto::{ConversationDto, ConversationHistoryResponse, VoiceAssistantRequest, VoiceAssistantResponse};
pub use error::VoiceAssistantError;
pub use model::ConversationRecord;
pub use service::{AssistantReply, VoiceAssistantService, VoiceAssistantServiceApi};
