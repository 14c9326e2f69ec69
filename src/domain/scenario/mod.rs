pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::{
    AnalyzeRequest, AnalyzeResponse, ScenarioDescriptor, ScenarioProgressDto,
    ScenarioProgressResponse,
};
pub use error::ScenarioError;
pub use model::ScenarioRecord;
pub use service::{ScenarioService, ScenarioServiceApi};
