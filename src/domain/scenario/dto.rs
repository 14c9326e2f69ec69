use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::ScenarioRecord;

/// Sentinel for descriptor fields that were never provided
pub const NOT_AVAILABLE: &str = "N/A";

/// The scenario the user was asked to speak to. The client sends the word
/// limit camel-cased.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ScenarioDescriptor {
    pub prompt: Option<String>,
    pub difficulty: Option<String>,
    #[serde(rename = "wordLimit")]
    pub word_limit: Option<i32>,
}

/// Request for POST /api/analyze
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub user_id: Option<String>,
    pub scenario: Option<ScenarioDescriptor>,
    pub response: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub prompt: Option<String>,
    pub difficulty: Option<String>,
    pub word_limit: Option<i32>,
    pub analyzed_response: String,
    pub feedback: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScenarioProgressDto {
    pub scenario: String,
    pub difficulty: String,
    pub response: String,
    pub feedback: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScenarioProgressResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub progress: Vec<ScenarioProgressDto>,
}

impl From<ScenarioRecord> for ScenarioProgressDto {
    fn from(record: ScenarioRecord) -> Self {
        let or_na = |field: Option<String>| field.unwrap_or_else(|| NOT_AVAILABLE.to_string());
        Self {
            scenario: or_na(record.scenario),
            difficulty: or_na(record.difficulty),
            response: or_na(record.response),
            feedback: or_na(record.feedback),
            timestamp: record.created_at,
        }
    }
}
