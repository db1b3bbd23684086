//! Configuration for summarization and the report CLI

use crate::error::{Error, Result};
use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "report.config.json";

/// Language used for tone labels, reasons and highlights
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Zh,
    En,
}

impl std::str::FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh" | "zh-cn" | "cn" => Ok(Locale::Zh),
            "en" | "en-us" => Ok(Locale::En),
            other => Err(Error::Config(format!("unknown locale: {other}"))),
        }
    }
}

/// Engine limits and presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SummaryConfig {
    pub locale: Locale,

    /// Offset used for hour-of-day math; `None` means UTC inside the engine
    pub utc_offset_minutes: Option<i32>,

    /// Senders listed in `topSenders`
    pub top_senders: usize,

    /// Links listed in `topLinks`
    pub top_links: usize,

    /// Ranked keywords exposed in the summary
    pub keywords: usize,

    /// Max topics accepted
    pub max_topics: usize,

    /// Topics seen in fewer messages are discarded
    pub min_topic_messages: usize,

    /// Question preview length in code points
    pub question_preview_chars: usize,

    /// Response hours reported
    pub best_response_hours: usize,
}

impl SummaryConfig {
    pub fn new() -> Self {
        Self {
            locale: Locale::Zh,
            utc_offset_minutes: None,
            top_senders: 5,
            top_links: 5,
            keywords: 20,
            max_topics: 5,
            min_topic_messages: 3,
            question_preview_chars: 120,
            best_response_hours: 3,
        }
    }

    /// Offset for hour bucketing and ISO timestamps
    pub fn offset(&self) -> FixedOffset {
        let utc = Utc.fix();
        match self.utc_offset_minutes {
            Some(minutes) => FixedOffset::east_opt(minutes.saturating_mul(60)).unwrap_or_else(|| {
                tracing::warn!(minutes, "utc offset out of range, using UTC");
                utc
            }),
            None => utc,
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Chat source settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatlogConfig {
    pub talker: String,
    pub talker_name: String,
    pub talker_aliases: HashMap<String, String>,
}

/// Top-level config document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub chatlog: ChatlogConfig,
    pub summary: SummaryConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from JSON. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&contents)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// `report.config.json` in the working directory, else the user config dir
    pub fn default_path() -> PathBuf {
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return local;
        }
        dirs::config_dir()
            .map(|dir| dir.join("chatpulse").join("config.json"))
            .filter(|p| p.exists())
            .unwrap_or(local)
    }

    /// Friendly label for a talker id, if one is configured
    pub fn talker_label(&self, id: &str) -> Option<&str> {
        if id.is_empty() {
            return None;
        }
        if let Some(alias) = self.chatlog.talker_aliases.get(id) {
            if !alias.is_empty() {
                return Some(alias);
            }
        }
        if id == self.chatlog.talker && !self.chatlog.talker_name.is_empty() {
            return Some(&self.chatlog.talker_name);
        }
        None
    }
}
