use chatpulse_store::{SummaryRecord, read_jsonl};
use std::path::Path;

fn compute_stats(records: &[SummaryRecord]) -> String {
    if records.is_empty() {
        return "No runs to analyze.".to_string();
    }
    let total = records.len();
    let messages: usize = records.iter().map(|r| r.total_messages).sum();
    let avg_score = records.iter().map(|r| r.vibe_score as f64).sum::<f64>() / total as f64;
    let best = records.iter().max_by_key(|r| r.vibe_score);

    let mut out = format!(
        "Total runs: {}\n\
         Total messages: {}\n\
         Avg vibe score: {:.1}",
        total, messages, avg_score
    );
    if let Some(best) = best {
        out.push_str(&format!(
            "\nBest day: {} {} ({})",
            best.date, best.talker, best.vibe_score
        ));
    }
    out
}

fn format_run(record: &SummaryRecord) -> String {
    format!(
        "  {} | {} {} | messages:{} vibe:{}",
        record.generated_at.format("%Y-%m-%d %H:%M"),
        if record.date.is_empty() { "-" } else { record.date.as_str() },
        record.talker,
        record.total_messages,
        record.vibe_score,
    )
}

pub fn run(path: &Path, stats: bool, limit: usize) -> anyhow::Result<()> {
    let records: Vec<SummaryRecord> = read_jsonl(path)?;

    if records.is_empty() {
        println!("No run history");
        return Ok(());
    }

    if stats {
        println!("{}", compute_stats(&records));
        return Ok(());
    }

    let recent: Vec<_> = records.iter().rev().take(limit).collect();
    println!("Recent Runs (last {})", recent.len());
    println!("=====================");
    for record in recent {
        println!("{}", format_run(record));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(date: &str, messages: usize, score: u32) -> SummaryRecord {
        SummaryRecord {
            date: date.to_string(),
            talker: "team".to_string(),
            generated_at: Utc.with_ymd_and_hms(2024, 5, 2, 8, 30, 0).unwrap(),
            total_messages: messages,
            vibe_score: score,
        }
    }

    #[test]
    fn test_compute_stats() {
        let stats = compute_stats(&[record("2024-05-01", 40, 60), record("2024-05-02", 80, 90)]);
        assert!(stats.contains("Total runs: 2"));
        assert!(stats.contains("Total messages: 120"));
        assert!(stats.contains("Avg vibe score: 75.0"));
        assert!(stats.contains("Best day: 2024-05-02 team (90)"));
    }

    #[test]
    fn test_compute_stats_empty() {
        assert_eq!(compute_stats(&[]), "No runs to analyze.");
    }

    #[test]
    fn test_format_run() {
        assert_eq!(
            format_run(&record("", 3, 12)),
            "  2024-05-02 08:30 | - team | messages:3 vibe:12"
        );
    }

    #[test]
    fn test_run_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(run(&dir.path().join("none.jsonl"), false, 20).is_ok());
    }
}
