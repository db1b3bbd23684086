//! Reply-debt report built from the question ledger

use crate::ledger::{LedgerEntry, QuestionLedger};
use crate::summary::{ReplyDebt, ReplyItem};
use crate::text::{round_to, truncate_chars};
use chrono::{DateTime, FixedOffset, SecondsFormat};
use std::collections::HashMap;

fn question_preview(entry: &LedgerEntry, max_chars: usize) -> String {
    let mut text = entry.message.body().trim();
    if text.is_empty() {
        if let Some(reference) = &entry.message.reference {
            text = reference.content.trim();
        }
    }
    truncate_chars(text, max_chars)
}

fn base_item(entry: &LedgerEntry, preview_chars: usize) -> ReplyItem {
    ReplyItem {
        questioner: entry.message.sender_display().trim().to_string(),
        question: question_preview(entry, preview_chars),
        asked_at: entry
            .asked_at
            .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
            .unwrap_or_default(),
        mentions: entry.mentions.clone(),
        ..Default::default()
    }
}

/// Split ledger entries into outstanding and resolved items and derive
/// response statistics.
///
/// `last_time` is the latest message time of the day; outstanding ages are
/// measured against it.
pub fn build_reply_debt(
    ledger: &QuestionLedger,
    last_time: Option<DateTime<FixedOffset>>,
    preview_chars: usize,
    best_hours: usize,
) -> ReplyDebt {
    if ledger.is_empty() {
        return ReplyDebt::default();
    }

    let mut debt = ReplyDebt::default();
    let mut latency_sum = 0.0;
    let mut latency_count = 0usize;
    let mut hour_counts: HashMap<u32, usize> = HashMap::new();

    for entry in ledger.entries() {
        let mut item = base_item(entry, preview_chars);
        if entry.resolved {
            item.response_minutes = Some(round_to(entry.response_minutes, 1));
            // BTreeMap keys order by identity; display names need their own sort
            let mut responders: Vec<String> = entry.responders.values().cloned().collect();
            responders.sort();
            item.responders = responders;

            if entry.response_minutes > 0.0 {
                latency_sum += entry.response_minutes;
                latency_count += 1;
            }
            if let Some(hour) = entry.response_hour {
                *hour_counts.entry(hour).or_default() += 1;
            }
            debt.resolved.push(item);
        } else {
            if let (Some(asked), Some(last)) = (entry.asked_at, last_time) {
                let age = (last - asked).num_milliseconds() as f64 / 60_000.0;
                item.age_minutes = Some(round_to(age.max(0.0), 1));
            }
            debt.outstanding.push(item);
        }
    }

    if latency_count > 0 {
        debt.avg_response_minutes = round_to(latency_sum / latency_count as f64, 1);
    }

    let mut ranked: Vec<(u32, usize)> = hour_counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    debt.best_response_hours = ranked.into_iter().take(best_hours).map(|(h, _)| h).collect();

    tracing::debug!(
        outstanding = debt.outstanding.len(),
        resolved = debt.resolved.len(),
        avg = debt.avg_response_minutes,
        "built reply debt"
    );
    debt
}
