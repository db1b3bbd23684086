//! Daily chat summarizer.
//!
//! One ordered pass gathers statistics and tracks questions; topic seeding,
//! vibe scoring and the reply-debt report then run over that state. No I/O
//! and no shared state, so independent days can be summarized in parallel.

pub mod aggregate;
pub mod highlights;
pub mod ledger;
pub mod phrases;
pub mod reply_debt;
pub mod sentiment;
mod summary;
pub mod text;
pub mod topics;
pub mod vibes;

pub use summary::{GroupVibes, KeyCount, ReplyDebt, ReplyItem, Summary, Tone, Topic};

use chatpulse_core::{Message, SummaryConfig};

/// Summarizes a day's messages under a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: SummaryConfig,
}

impl Summarizer {
    pub fn new(config: SummaryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    pub fn summarize(&self, messages: &[Message]) -> Summary {
        let cfg = &self.config;
        let offset = cfg.offset();
        let (day, ledger) = aggregate::scan(messages, &offset);

        let keywords = topics::top_k(&day.token_counts, cfg.keywords);
        let topics = topics::extract_topics(
            &keywords,
            &day.texts,
            cfg.min_topic_messages,
            cfg.max_topics,
        );
        let unique_senders = day.unique_senders();

        let mut summary = Summary {
            total_messages: day.total,
            unique_senders,
            top_senders: topics::top_k(&day.sender_counts, cfg.top_senders),
            top_links: topics::top_k_keys(&day.link_counts, cfg.top_links),
            hourly_histogram: day.histogram,
            keywords,
            peak_hour: day.peak_hour(),
            highlights: Vec::new(),
            topics,
            image_count: day.image_count,
            group_vibes: vibes::score_vibes(day.total, unique_senders, &day.signals, cfg.locale),
            reply_debt: reply_debt::build_reply_debt(
                &ledger,
                day.last_time,
                cfg.question_preview_chars,
                cfg.best_response_hours,
            ),
        };
        summary.highlights = highlights::build_highlights(&summary, cfg.locale);

        tracing::info!(
            messages = summary.total_messages,
            senders = summary.unique_senders,
            topics = summary.topics.len(),
            score = summary.group_vibes.score,
            "summarized day"
        );
        summary
    }
}

/// Summarize with the default configuration
pub fn summarize(messages: &[Message]) -> Summary {
    Summarizer::default().summarize(messages)
}
