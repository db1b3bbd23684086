//! Run history records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of the summarize run history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub talker: String,
    pub generated_at: DateTime<Utc>,
    pub total_messages: usize,
    pub vibe_score: u32,
}
