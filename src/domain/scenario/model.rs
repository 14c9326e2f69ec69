use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One analyzed scenario attempt. Descriptor fields the client never sent
/// are stored as NULL and defaulted to "N/A" on read.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScenarioRecord {
    pub scenario: Option<String>,
    pub difficulty: Option<String>,
    pub response: Option<String>,
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}
