use super::summarize_day;
use crate::cli::DayArgs;
use chatpulse_summarize::{ReplyItem, Summary};

pub fn run(args: &DayArgs) -> anyhow::Result<()> {
    let result = summarize_day(args)?;
    let title = match (result.day.date.as_str(), result.talker_label()) {
        ("", "") => String::new(),
        (date, "") => date.to_string(),
        ("", talker) => talker.to_string(),
        (date, talker) => format!("{} {}", talker, date),
    };
    println!("{}", build_report(&title, &result.summary));
    Ok(())
}

fn build_report(title: &str, summary: &Summary) -> String {
    if summary.total_messages == 0 {
        return "No messages for this day.".to_string();
    }

    let mut sections = Vec::new();

    // Section 1: Overview
    let heading = if title.is_empty() {
        "Chat Digest".to_string()
    } else {
        format!("Chat Digest: {}", title)
    };
    sections.push(format!(
        "{}\n{}\n\
         Messages: {} | Senders: {} | Images: {}\n\
         Peak hour: {:02}:00-{:02}:59",
        heading,
        "=".repeat(heading.chars().count()),
        summary.total_messages,
        summary.unique_senders,
        summary.image_count,
        summary.peak_hour,
        summary.peak_hour,
    ));

    if !summary.highlights.is_empty() {
        sections.push(format!(
            "\nHighlights\n----------\n{}",
            bullet_list(summary.highlights.iter().map(String::as_str))
        ));
    }

    // Section 2: Who and what
    if !summary.top_senders.is_empty() {
        let rows: Vec<String> = summary
            .top_senders
            .iter()
            .map(|kv| format!("{} ({})", kv.key, kv.count))
            .collect();
        sections.push(format!(
            "\nTop Senders\n-----------\n{}",
            bullet_list(rows.iter().map(String::as_str))
        ));
    }
    if !summary.keywords.is_empty() {
        let words: Vec<&str> = summary.keywords.iter().map(|kv| kv.key.as_str()).collect();
        sections.push(format!("\nKeywords\n--------\n  {}", words.join(", ")));
    }
    if !summary.topics.is_empty() {
        let rows: Vec<String> = summary
            .topics
            .iter()
            .map(|t| format!("{} x{}: {}", t.name, t.count, t.representative))
            .collect();
        sections.push(format!(
            "\nTopics\n------\n{}",
            bullet_list(rows.iter().map(String::as_str))
        ));
    }
    if !summary.top_links.is_empty() {
        sections.push(format!(
            "\nLinks\n-----\n{}",
            bullet_list(summary.top_links.iter().map(String::as_str))
        ));
    }

    // Section 3: Vibes
    let vibes = &summary.group_vibes;
    let mut vibe_section = format!(
        "\nGroup Vibes\n-----------\n\
         Score: {}/100 ({})\n\
         activity:{:.2} sentiment:{:.2} info:{:.2} controversy:{:.2}",
        vibes.score,
        vibes.tone,
        vibes.activity,
        vibes.sentiment,
        vibes.info_density,
        vibes.controversy
    );
    if !vibes.reasons.is_empty() {
        vibe_section.push('\n');
        vibe_section.push_str(&bullet_list(vibes.reasons.iter().map(String::as_str)));
    }
    sections.push(vibe_section);

    // Section 4: Reply debt
    let debt = &summary.reply_debt;
    if !debt.outstanding.is_empty() || !debt.resolved.is_empty() {
        let hours: Vec<String> = debt
            .best_response_hours
            .iter()
            .map(|h| format!("{:02}:00", h))
            .collect();
        let mut lines = vec![format!(
            "Resolved: {} | Outstanding: {} | Avg response: {:.1} min",
            debt.resolved.len(),
            debt.outstanding.len(),
            debt.avg_response_minutes
        )];
        if !hours.is_empty() {
            lines.push(format!("Best response hours: {}", hours.join(", ")));
        }
        lines.extend(debt.outstanding.iter().map(outstanding_line));
        sections.push(format!("\nReply Debt\n----------\n{}", lines.join("\n")));
    }

    sections.join("\n")
}

fn outstanding_line(item: &ReplyItem) -> String {
    let age = item
        .age_minutes
        .map(|m| format!(" ({:.0} min)", m))
        .unwrap_or_default();
    let who = if item.questioner.is_empty() {
        "(unknown)"
    } else {
        item.questioner.as_str()
    };
    format!("  ? {}: {}{}", who, item.question, age)
}

fn bullet_list<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items
        .map(|s| format!("  - {}", s))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatpulse_core::{Locale, Message, SummaryConfig};
    use chatpulse_summarize::Summarizer;

    fn msg(sender: &str, ts: i64, content: &str) -> Message {
        Message {
            sender_name: sender.to_string(),
            timestamp: ts,
            content: content.to_string(),
            is_question: content.ends_with('?'),
            ..Default::default()
        }
    }

    fn sample_summary() -> Summary {
        let config = SummaryConfig {
            locale: Locale::En,
            ..SummaryConfig::new()
        };
        Summarizer::new(config).summarize(&[
            msg("Alice", 1_714_557_600, "release notes https://example.com/notes"),
            msg("Bob", 1_714_557_660, "who can review the release?"),
            msg("Carol", 1_714_557_720, "release looks good"),
            msg("Alice", 1_714_557_780, "release tonight then"),
        ])
    }

    #[test]
    fn test_build_report_has_sections() {
        let report = build_report("team 2024-05-01", &sample_summary());
        assert!(report.starts_with("Chat Digest: team 2024-05-01"));
        assert!(report.contains("Top Senders"));
        assert!(report.contains("Alice (2)"));
        assert!(report.contains("Keywords"));
        assert!(report.contains("Topics"));
        assert!(report.contains("Group Vibes"));
        assert!(report.contains("Reply Debt"));
        assert!(report.contains("? Bob: who can review the release?"));
    }

    #[test]
    fn test_build_report_empty() {
        let report = build_report("", &Summary::default());
        assert!(report.contains("No messages"));
    }

    #[test]
    fn test_outstanding_line_without_age() {
        let item = ReplyItem {
            question: "anyone?".to_string(),
            ..Default::default()
        };
        assert_eq!(outstanding_line(&item), "  ? (unknown): anyone?");
    }
}
