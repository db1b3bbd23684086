//! Best-effort conversion of loosely-typed chat-log JSON into [`Message`]s.
//!
//! The chat-log service has shipped several response shapes over time, so
//! every field is looked up under a list of aliases and the first non-blank
//! value wins. Upstream flags (mentions, bracket emojis, question marker) are
//! derived from the text here so the summarizer only ever sees typed records.

use crate::error::{Error, Result};
use crate::lexicon::{
    MENTION_TRIM_CHARS, MENTION_TRIM_SPACES, QUESTION_KEYWORDS, WIDE_SPACES,
};
use crate::types::{MSG_TYPE_SHARE, Message, Reference, Share};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

/// Keys that may hold the message array inside a response object
const ENVELOPE_KEYS: &[&str] = &["data", "list", "messages", "items", "result"];

// `\s` is spelled out so Unicode spaces stay part of the name
static MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([^\t\n\x0C\r @]{1,32})").expect("valid mention regex"));

static BRACKET_EMOJI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.+?)\]").expect("valid emoji regex"));

/// Messages plus whatever else the response carried
#[derive(Debug, Clone, Default)]
pub struct Envelope {
    pub messages: Vec<Message>,
    pub meta: Map<String, Value>,
}

/// Find the message array in a response: a bare array, or an object holding
/// it under `data`, `list`, `messages`, `items` or `result`.
pub fn locate_messages(value: Value) -> Result<(Vec<Value>, Map<String, Value>)> {
    match value {
        Value::Array(items) => Ok((items, Map::new())),
        Value::Object(mut obj) => {
            let key = ENVELOPE_KEYS
                .iter()
                .find(|k| obj.get(**k).is_some_and(Value::is_array))
                .ok_or(Error::MissingMessages)?;
            match obj.remove(*key) {
                Some(Value::Array(items)) => Ok((items, obj)),
                _ => Err(Error::MissingMessages),
            }
        }
        _ => Err(Error::MissingMessages),
    }
}

/// Parse a full response into typed messages; non-object entries are skipped
pub fn parse_messages(value: Value) -> Result<Envelope> {
    let (items, meta) = locate_messages(value)?;
    let total = items.len();
    let messages: Vec<Message> = items
        .iter()
        .filter_map(Value::as_object)
        .map(Message::from_raw)
        .collect();
    if messages.len() < total {
        tracing::debug!(
            skipped = total - messages.len(),
            "ignored non-object entries in message array"
        );
    }
    Ok(Envelope { messages, meta })
}

impl Message {
    /// Build a message from one raw record
    pub fn from_raw(m: &Map<String, Value>) -> Self {
        let mut msg = Message {
            id: str_of(first(m, &["id", "_id", "msgId", "msgID"])),
            msg_id: str_of(first(m, &["msgId", "msgID", "id"])),
            talker: str_of(first(m, &["talker", "chatroom", "room", "toUserName"])),
            talker_name: str_of(first(m, &["talkerName", "roomName"])),
            sender: str_of(first(m, &["sender", "from", "fromUser", "fromUserName"])),
            sender_name: str_of(first(
                m,
                &["senderName", "displayName", "nickname", "senderNick"],
            )),
            from: str_of(m.get("from")),
            nickname: str_of(first(m, &["nickname", "displayName", "senderName"])),
            timestamp: int_of(first(m, &["seq", "timestamp", "ts", "createTime"])),
            create_time: int_of(m.get("createTime")),
            time: str_of(first(m, &["time", "createdAt", "date"])),
            content: str_of(first(m, &["content", "text", "message", "body"])),
            text: str_of(m.get("text")),
            kind: str_of(first(m, &["type", "msgTypeName"])),
            msg_type: int_of(first(m, &["msgType", "type"])),
            sub_type: int_of(m.get("subType")),
            is_chat_room: bool_of(m.get("isChatRoom")),
            is_self: bool_of(m.get("isSelf")),
            media_md5: str_of(m.get("mediaMD5")),
            media_path: str_of(m.get("mediaPath")),
            ..Default::default()
        };

        let body = msg.body().to_string();
        if !body.is_empty() {
            msg.mentions = extract_mentions(&body);
            msg.emojis = extract_bracket_emojis(&body);
            msg.is_question = is_question_text(&body);
        }

        if let Some(contents) = m.get("contents").and_then(Value::as_object) {
            if let Some(md5) = contents.get("md5") {
                msg.media_md5 = str_of(Some(md5));
            }
            if let Some(path) = contents.get("path") {
                msg.media_path = str_of(Some(path));
            }
            if let Some(refer) = contents.get("refer").and_then(Value::as_object) {
                msg.reference = parse_reference(refer);
            }
            if msg.msg_type == MSG_TYPE_SHARE {
                let share = share_of(contents);
                if !share.title.is_empty() || !share.url.is_empty() {
                    msg.share = Some(share);
                }
            }
        }

        if msg.share.is_none() {
            let mut app_msg = Map::new();
            for key in ["appMsgInfo", "appMsg"] {
                if let Some(obj) = m.get(key).and_then(Value::as_object) {
                    app_msg.extend(obj.iter().map(|(k, v)| (k.clone(), v.clone())));
                }
            }
            if !app_msg.is_empty() {
                msg.share = Some(share_of(&app_msg));
            }
        }

        // Records persisted by a previous run already carry typed fields
        apply_typed_overrides(&mut msg, m);
        msg
    }
}

fn apply_typed_overrides(msg: &mut Message, m: &Map<String, Value>) {
    if let Some(list) = m.get("mentions").and_then(string_list) {
        msg.mentions = list;
    }
    if let Some(list) = m.get("emojis").and_then(string_list) {
        msg.emojis = list;
    }
    if let Some(flag) = m.get("isQuestion").and_then(Value::as_bool) {
        msg.is_question = flag;
    }
    if msg.reference.is_none() {
        if let Some(obj) = m.get("reference").and_then(Value::as_object) {
            msg.reference = parse_reference(obj);
        }
    }
    if msg.share.is_none() {
        if let Some(obj) = m.get("share").and_then(Value::as_object) {
            msg.share = Some(share_of(obj));
        }
    }
}

fn parse_reference(m: &Map<String, Value>) -> Option<Reference> {
    if m.is_empty() {
        return None;
    }
    let reference = Reference {
        seq: int_of(m.get("seq")),
        time: str_of(m.get("time")),
        talker: str_of(m.get("talker")),
        talker_name: str_of(m.get("talkerName")),
        sender: str_of(m.get("sender")),
        sender_name: str_of(m.get("senderName")),
        msg_type: int_of(first(m, &["type", "msgType"])),
        sub_type: int_of(m.get("subType")),
        content: str_of(first(m, &["content", "text", "message"])),
    };
    (!reference.is_empty()).then_some(reference)
}

fn share_of(m: &Map<String, Value>) -> Share {
    Share {
        title: str_of(m.get("title")),
        desc: str_of(m.get("desc")),
        url: str_of(m.get("url")),
    }
}

/// Names following `@`, with surrounding punctuation removed
pub fn extract_mentions(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let cleaned = normalize_spaces(text);
    MENTION_RE
        .captures_iter(&cleaned)
        .filter_map(|caps| caps.get(1))
        .map(|name| {
            name.as_str()
                .trim_matches(|c| MENTION_TRIM_CHARS.contains(&c))
                .trim_matches(|c| MENTION_TRIM_SPACES.contains(&c))
                .to_string()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

/// Inner text of `[...]` emoji tokens
pub fn extract_bracket_emojis(text: &str) -> Vec<String> {
    BRACKET_EMOJI_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|token| token.as_str().trim().to_string())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Question mark (ASCII or full-width) or a known asking phrase
pub fn is_question_text(text: &str) -> bool {
    let cleaned = normalize_spaces(text);
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return false;
    }
    if cleaned.contains(['？', '?']) {
        return true;
    }
    let lower = cleaned.to_lowercase();
    QUESTION_KEYWORDS
        .iter()
        .any(|kw| lower.contains(&kw.to_lowercase()))
}

fn normalize_spaces(s: &str) -> String {
    s.chars()
        .filter(|&c| c != '\u{200b}')
        .map(|c| if WIDE_SPACES.contains(&c) { ' ' } else { c })
        .collect()
}

/// First present value that is not null or a blank string
fn first<'a>(m: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().filter_map(|k| m.get(*k)).find(|v| match v {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    })
}

fn str_of(v: Option<&Value>) -> String {
    match v {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn int_of(v: Option<&Value>) -> i64 {
    match v {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn bool_of(v: Option<&Value>) -> bool {
    match v {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "true" || s == "1",
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    }
}

fn string_list(v: &Value) -> Option<Vec<String>> {
    v.as_array().map(|items| {
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> Message {
        Message::from_raw(value.as_object().unwrap())
    }

    #[test]
    fn test_locate_bare_array() {
        let (items, meta) = locate_messages(json!([{"content": "hi"}])).unwrap();
        assert_eq!(items.len(), 1);
        assert!(meta.is_empty());
    }

    #[test]
    fn test_locate_envelope_keeps_meta() {
        let (items, meta) =
            locate_messages(json!({"total": 2, "items": [{}, {}], "page": 1})).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(meta.get("total"), Some(&json!(2)));
        assert!(!meta.contains_key("items"));
    }

    #[test]
    fn test_locate_missing_array() {
        assert!(matches!(
            locate_messages(json!({"data": "nope"})),
            Err(Error::MissingMessages)
        ));
        assert!(locate_messages(json!("text")).is_err());
    }

    #[test]
    fn test_parse_skips_non_objects() {
        let env = parse_messages(json!({"data": [{"content": "a"}, 3, "x"]})).unwrap();
        assert_eq!(env.messages.len(), 1);
    }

    #[test]
    fn test_field_aliases() {
        let msg = raw(json!({
            "_id": "42",
            "fromUser": "wxid_a",
            "displayName": "Alice",
            "ts": 1_700_000_000_000i64,
            "body": "hello there",
            "type": 1,
        }));
        assert_eq!(msg.id, "42");
        assert_eq!(msg.sender, "wxid_a");
        assert_eq!(msg.sender_name, "Alice");
        assert_eq!(msg.nickname, "Alice");
        assert_eq!(msg.timestamp, 1_700_000_000_000);
        assert_eq!(msg.content, "hello there");
        assert_eq!(msg.msg_type, 1);
        assert_eq!(msg.kind, "1");
    }

    #[test]
    fn test_blank_alias_falls_through() {
        let msg = raw(json!({"senderName": "  ", "nickname": "Bob", "msgType": "3"}));
        assert_eq!(msg.sender_name, "Bob");
        assert!(msg.is_image());
    }

    #[test]
    fn test_derived_flags() {
        let msg = raw(json!({"content": "@Bob 这个怎么处理 [捂脸]"}));
        assert_eq!(msg.mentions, vec!["Bob"]);
        assert_eq!(msg.emojis, vec!["捂脸"]);
        assert!(msg.is_question);
    }

    #[test]
    fn test_reference_and_share() {
        let msg = raw(json!({
            "msgType": 49,
            "contents": {
                "title": "Release notes",
                "url": "https://example.com/notes",
                "refer": {"senderName": "Alice", "content": "why?"}
            }
        }));
        let share = msg.share.unwrap();
        assert_eq!(share.url, "https://example.com/notes");
        let reference = msg.reference.unwrap();
        assert_eq!(reference.sender_name, "Alice");
        assert_eq!(reference.content, "why?");
    }

    #[test]
    fn test_empty_reference_dropped() {
        let msg = raw(json!({"contents": {"refer": {"talker": "room"}}}));
        assert!(msg.reference.is_none());
    }

    #[test]
    fn test_app_msg_share_fallback() {
        let msg = raw(json!({"appMsg": {"title": "t", "url": "https://x.io"}}));
        assert_eq!(msg.share_url(), Some("https://x.io"));
    }

    #[test]
    fn test_typed_fields_survive_reload() {
        let original = Message {
            sender_name: "Bob".to_string(),
            content: "ok".to_string(),
            mentions: vec!["Alice".to_string()],
            reference: Some(Reference {
                sender_name: "Alice".to_string(),
                content: "why?".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let value = serde_json::to_value(&original).unwrap();
        let reloaded = Message::from_raw(value.as_object().unwrap());
        assert_eq!(reloaded.mentions, vec!["Alice"]);
        assert_eq!(reloaded.reference, original.reference);
    }

    #[test]
    fn test_extract_mentions_trims_punctuation() {
        assert_eq!(extract_mentions("@张三， 你看下"), vec!["张三"]);
        assert_eq!(extract_mentions("cc @bob! and @carol\u{2005}"), vec!["bob", "carol"]);
        assert!(extract_mentions("no mentions").is_empty());
    }

    #[test]
    fn test_is_question_text() {
        assert!(is_question_text("is it done?"));
        assert!(is_question_text("请问一下"));
        assert!(is_question_text("Any idea about this"));
        assert!(!is_question_text("shipped it"));
        assert!(!is_question_text("\u{200b} "));
    }
}
