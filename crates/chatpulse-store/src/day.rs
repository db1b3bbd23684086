//! Day files: one talker's messages for one calendar day

use chatpulse_core::{Message, Result, parse_messages};
use serde_json::{Map, Value};
use std::path::Path;

/// A loaded day of chat
#[derive(Debug, Clone, Default)]
pub struct DayFile {
    pub date: String,
    pub talker: String,
    pub keyword: String,
    /// Envelope keys other than the message array
    pub meta: Map<String, Value>,
    pub messages: Vec<Message>,
}

fn meta_str(meta: &Map<String, Value>, key: &str) -> String {
    meta.get(key)
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

impl DayFile {
    /// Build from an already-parsed JSON document
    pub fn from_value(value: Value) -> Result<Self> {
        let envelope = parse_messages(value)?;
        Ok(Self {
            date: meta_str(&envelope.meta, "date"),
            talker: meta_str(&envelope.meta, "talker"),
            keyword: meta_str(&envelope.meta, "keyword"),
            meta: envelope.meta,
            messages: envelope.messages,
        })
    }
}

/// Read a day file: a bare message array, a chat-log response envelope, or a
/// `{date, talker, keyword, messages}` document.
pub fn read_day(path: &Path) -> Result<DayFile> {
    let raw = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&raw)?;
    let day = DayFile::from_value(value)?;
    tracing::debug!(
        path = %path.display(),
        messages = day.messages.len(),
        date = %day.date,
        "loaded day file"
    );
    Ok(day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatpulse_core::Error;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_read_day_document() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "day.json",
            r#"{
                "date": "2024-05-01",
                "talker": "team@chatroom",
                "keyword": "",
                "generator": "export",
                "messages": [
                    {"senderName": "Alice", "content": "早上好", "seq": 1714521600000, "type": 1},
                    {"senderName": "Bob", "content": "怎么部署?", "timestamp": 1714521660}
                ]
            }"#,
        );

        let day = read_day(&path).unwrap();
        assert_eq!(day.date, "2024-05-01");
        assert_eq!(day.talker, "team@chatroom");
        assert_eq!(day.messages.len(), 2);
        assert_eq!(day.messages[0].sender_name, "Alice");
        assert!(day.messages[1].is_question);
        assert_eq!(day.meta["generator"], "export");
        assert!(!day.meta.contains_key("messages"));
    }

    #[test]
    fn test_read_day_bare_array() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "day.json", r#"[{"sender": "wxid_1", "text": "hi"}]"#);
        let day = read_day(&path).unwrap();
        assert!(day.date.is_empty());
        assert_eq!(day.messages[0].body(), "hi");
    }

    #[test]
    fn test_read_day_without_messages() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "day.json", r#"{"code": 0, "msg": "ok"}"#);
        assert!(matches!(read_day(&path), Err(Error::MissingMessages)));
    }

    #[test]
    fn test_read_day_errors() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            read_day(&dir.path().join("missing.json")),
            Err(Error::Io(_))
        ));
        let bad = write(&dir, "bad.json", "{not json");
        assert!(matches!(read_day(&bad), Err(Error::Json(_))));
    }
}
