//! Core types for chat messages

use chrono::{DateTime, FixedOffset, TimeZone};
use serde::{Deserialize, Serialize};

/// Plain text message
pub const MSG_TYPE_TEXT: i64 = 1;
/// Image message
pub const MSG_TYPE_IMAGE: i64 = 3;
/// Shared link / article card
pub const MSG_TYPE_SHARE: i64 = 49;

/// Epoch values above this are milliseconds
const MILLIS_CUTOFF: i64 = 1_000_000_000_000;

/// A single chat message as delivered by the chat-log service.
///
/// Every field is optional on the wire; absent values deserialize to their
/// defaults so a partial record never fails to load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Message {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub msg_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub talker: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub talker_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sender: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sender_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub from: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub nickname: String,
    /// Seconds or milliseconds since the epoch
    pub timestamp: i64,
    pub create_time: i64,
    /// RFC 3339 time string
    #[serde(skip_serializing_if = "String::is_empty")]
    pub time: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Free-form type name (e.g. "text")
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
    pub msg_type: i64,
    pub sub_type: i64,
    pub is_chat_room: bool,
    pub is_self: bool,
    #[serde(rename = "mediaMD5", skip_serializing_if = "String::is_empty")]
    pub media_md5: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub media_path: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mentions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub emojis: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,
    /// Set upstream when the text reads as a question
    pub is_question: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share: Option<Share>,
}

/// Quoted message a reply points back to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Reference {
    pub seq: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub time: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub talker: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub talker_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sender: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sender_name: String,
    #[serde(rename = "type")]
    pub msg_type: i64,
    pub sub_type: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
}

impl Reference {
    /// True when the quote carries nothing worth keeping
    pub fn is_empty(&self) -> bool {
        self.seq == 0
            && self.time.is_empty()
            && self.sender.is_empty()
            && self.sender_name.is_empty()
            && self.content.is_empty()
    }
}

/// Shared link / article payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Share {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub desc: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl Message {
    /// Display name: sender name, nickname, raw sender id, then `from`
    pub fn sender_display(&self) -> &str {
        [&self.sender_name, &self.nickname, &self.sender, &self.from]
            .into_iter()
            .find(|s| !s.trim().is_empty())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Message text: `content`, falling back to `text`
    pub fn body(&self) -> &str {
        if self.content.is_empty() {
            &self.text
        } else {
            &self.content
        }
    }

    /// Epoch seconds from `timestamp`, else `create_time`
    pub fn epoch_seconds(&self) -> Option<i64> {
        let ts = if self.timestamp > 0 {
            self.timestamp
        } else if self.create_time > 0 {
            self.create_time
        } else {
            return None;
        };
        Some(if ts > MILLIS_CUTOFF { ts / 1000 } else { ts })
    }

    /// Best-effort message time in `offset`.
    ///
    /// Numeric timestamps win; the RFC 3339 `time` string is the last resort.
    pub fn time_in(&self, offset: &FixedOffset) -> Option<DateTime<FixedOffset>> {
        if let Some(secs) = self.epoch_seconds() {
            return offset.timestamp_opt(secs, 0).single();
        }
        if self.time.trim().is_empty() {
            return None;
        }
        DateTime::parse_from_rfc3339(self.time.trim())
            .ok()
            .map(|t| t.with_timezone(offset))
    }

    pub fn is_image(&self) -> bool {
        self.msg_type == MSG_TYPE_IMAGE
    }

    pub fn is_share(&self) -> bool {
        self.msg_type == MSG_TYPE_SHARE
    }

    /// URL of the attached share card, if any
    pub fn share_url(&self) -> Option<&str> {
        self.share
            .as_ref()
            .map(|s| s.url.as_str())
            .filter(|u| !u.is_empty())
    }
}
