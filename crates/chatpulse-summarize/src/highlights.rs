//! One-line highlights for the day's digest

use crate::phrases;
use crate::summary::Summary;
use chatpulse_core::Locale;
use url::Url;

pub const MAX_HIGHLIGHTS: usize = 5;
const LISTED_SENDERS: usize = 3;
const LISTED_TOPICS: usize = 3;

fn link_host(link: &str) -> Option<String> {
    Url::parse(link)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .filter(|h| !h.is_empty())
}

/// Build the highlight lines from an otherwise complete summary
pub fn build_highlights(summary: &Summary, locale: Locale) -> Vec<String> {
    // an empty day carries no highlights, like its other containers
    if summary.total_messages == 0 {
        return Vec::new();
    }
    let mut lines = vec![phrases::overview_line(
        locale,
        summary.total_messages,
        summary.unique_senders,
        summary.peak_hour,
    )];

    if !summary.top_senders.is_empty() {
        let parts: Vec<String> = summary
            .top_senders
            .iter()
            .take(LISTED_SENDERS)
            .map(|kv| format!("{}({})", kv.key, kv.count))
            .collect();
        lines.push(phrases::top_senders_line(locale, &parts));
    }

    if !summary.topics.is_empty() {
        let names: Vec<&str> = summary
            .topics
            .iter()
            .take(LISTED_TOPICS)
            .map(|t| t.name.as_str())
            .collect();
        lines.push(phrases::topics_line(locale, &names));
    }

    if let Some(first) = summary.top_links.first() {
        let host = link_host(first);
        lines.push(phrases::links_line(
            locale,
            summary.top_links.len(),
            host.as_deref(),
        ));
    }

    if summary.image_count > 0 {
        lines.push(phrases::images_line(locale, summary.image_count));
    }

    lines.truncate(MAX_HIGHLIGHTS);
    lines
}
