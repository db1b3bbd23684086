//! Summary record types

use serde::{Deserialize, Serialize};

/// A ranked key with its frequency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyCount {
    pub key: String,
    pub count: usize,
}

/// Analytical summary of one day of chat
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_messages: usize,
    pub unique_senders: usize,
    pub top_senders: Vec<KeyCount>,
    pub top_links: Vec<String>,
    pub hourly_histogram: [usize; 24],
    pub keywords: Vec<KeyCount>,
    pub peak_hour: u32,
    pub highlights: Vec<String>,
    pub topics: Vec<Topic>,
    pub image_count: usize,
    pub group_vibes: GroupVibes,
    pub reply_debt: ReplyDebt,
}

/// A trending keyword and the messages that mention it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub keywords: Vec<String>,
    pub count: usize,
    /// Longest message containing the keyword
    pub representative: String,
}

/// Ordinal tone scale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Buzzing,
    Active,
    #[default]
    Steady,
    Subdued,
}

impl Tone {
    pub fn from_score(score: u32) -> Self {
        if score >= 85 {
            Tone::Buzzing
        } else if score >= 70 {
            Tone::Active
        } else if score <= 40 {
            Tone::Subdued
        } else {
            Tone::Steady
        }
    }
}

/// Composite mood of the day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupVibes {
    /// 0-100
    pub score: u32,
    pub activity: f64,
    pub sentiment: f64,
    pub info_density: f64,
    pub controversy: f64,
    /// Localized label
    pub tone: String,
    /// `None` for an empty day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone_key: Option<Tone>,
    pub reasons: Vec<String>,
}

/// Questions left hanging vs. answered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyDebt {
    pub outstanding: Vec<ReplyItem>,
    pub resolved: Vec<ReplyItem>,
    pub avg_response_minutes: f64,
    pub best_response_hours: Vec<u32>,
}

/// One tracked question as displayed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyItem {
    pub questioner: String,
    pub question: String,
    /// RFC 3339, empty when unknown
    pub asked_at: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mentions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_minutes: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_minutes: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responders: Vec<String>,
}
