pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::{SaveProgressRequest, SaveProgressResponse, WordRepetitionDto, WordRepetitionHistoryResponse};
pub use error::WordRepetitionError;
pub use model::WordRepetitionRecord;
pub use service::{WordRepetitionInput, WordRepetitionService, WordRepetitionServiceApi};
