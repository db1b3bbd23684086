use super::{SummarizedDay, summarize_day};
use crate::cli::DayArgs;
use anyhow::Context;
use chatpulse_store::{SummaryRecord, append_jsonl, write_json_pretty};
use chatpulse_summarize::Summary;
use chrono::Utc;
use serde::Serialize;
use std::path::Path;

/// Summary JSON with the day's labels alongside
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Digest<'a> {
    #[serde(skip_serializing_if = "str::is_empty")]
    date: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    talker: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    talker_name: Option<&'a str>,
    #[serde(flatten)]
    summary: &'a Summary,
}

fn digest(result: &SummarizedDay) -> Digest<'_> {
    Digest {
        date: &result.day.date,
        talker: &result.day.talker,
        talker_name: result.config.talker_label(&result.day.talker),
        summary: &result.summary,
    }
}

fn history_record(result: &SummarizedDay) -> SummaryRecord {
    SummaryRecord {
        date: result.day.date.clone(),
        talker: result.day.talker.clone(),
        generated_at: Utc::now(),
        total_messages: result.summary.total_messages,
        vibe_score: result.summary.group_vibes.score,
    }
}

pub fn run(args: &DayArgs, out: Option<&Path>, history: Option<&Path>) -> anyhow::Result<()> {
    let result = summarize_day(args)?;
    let doc = digest(&result);

    match out {
        Some(path) => {
            write_json_pretty(path, &doc)
                .with_context(|| format!("writing summary to {}", path.display()))?;
            tracing::info!(path = %path.display(), "summary written");
        }
        None => println!("{}", serde_json::to_string_pretty(&doc)?),
    }

    if let Some(path) = history {
        append_jsonl(path, &history_record(&result))
            .with_context(|| format!("appending run history to {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatpulse_store::read_jsonl;
    use tempfile::TempDir;

    const DAY: &str = r#"{
        "date": "2024-05-01",
        "talker": "team@chatroom",
        "messages": [
            {"senderName": "Alice", "content": "why is the build failing?", "timestamp": 1714557600},
            {"senderName": "Bob", "content": "cache", "timestamp": 1714557900,
             "contents": {"refer": {"senderName": "Alice", "content": "why is the build failing?"}}}
        ]
    }"#;

    fn day_args(dir: &TempDir) -> DayArgs {
        let file = dir.path().join("day.json");
        std::fs::write(&file, DAY).unwrap();
        DayArgs {
            file,
            locale: None,
            utc_offset_minutes: Some(0),
            config: Some(dir.path().join("no-config.json")),
        }
    }

    #[test]
    fn test_writes_digest_and_history() {
        let dir = TempDir::new().unwrap();
        let args = day_args(&dir);
        let out = dir.path().join("out").join("summary.json");
        let history = dir.path().join("runs.jsonl");

        run(&args, Some(&out), Some(&history)).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(json["date"], "2024-05-01");
        assert_eq!(json["totalMessages"], 2);
        assert_eq!(json["replyDebt"]["avgResponseMinutes"], 5.0);
        assert!(json.get("talkerName").is_none());

        let records: Vec<SummaryRecord> = read_jsonl(&history).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].talker, "team@chatroom");
        assert_eq!(records[0].total_messages, 2);
    }

    #[test]
    fn test_missing_day_file_errors() {
        let dir = TempDir::new().unwrap();
        let mut args = day_args(&dir);
        args.file = dir.path().join("absent.json");
        let err = run(&args, None, None).unwrap_err();
        assert!(format!("{err:#}").contains("reading day file"));
    }
}
