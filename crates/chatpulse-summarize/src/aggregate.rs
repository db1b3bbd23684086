//! Single ordered pass over a day's messages.
//!
//! Statistics and the question ledger are driven from the same loop so that
//! answer matching sees messages strictly in arrival order.

use crate::ledger::QuestionLedger;
use crate::sentiment::sentiment_signals;
use crate::text::{char_len, extract_urls, tokenize};
use crate::vibes::VibeSignals;
use chatpulse_core::{MSG_TYPE_SHARE, Message};
use chrono::{DateTime, FixedOffset, Timelike};
use std::collections::HashMap;

/// Messages longer than this many code points count as long-form
const LONG_FORM_CHARS: usize = 80;

/// Running counters for one day
#[derive(Debug, Clone, Default)]
pub struct DayAggregate {
    pub total: usize,
    pub sender_counts: HashMap<String, usize>,
    pub link_counts: HashMap<String, usize>,
    pub token_counts: HashMap<String, usize>,
    pub histogram: [usize; 24],
    /// Non-empty message texts in input order
    pub texts: Vec<String>,
    pub image_count: usize,
    pub signals: VibeSignals,
    /// Latest known message time
    pub last_time: Option<DateTime<FixedOffset>>,
}

impl DayAggregate {
    fn observe(&mut self, msg: &Message, at: Option<DateTime<FixedOffset>>) {
        self.total += 1;

        // counted as displayed; only blank names are skipped
        let sender = msg.sender_display();
        if !sender.trim().is_empty() {
            *self.sender_counts.entry(sender.to_string()).or_default() += 1;
        }

        if let Some(at) = at {
            // only numeric timestamps feed the histogram
            if msg.epoch_seconds().is_some() {
                self.histogram[at.hour() as usize] += 1;
            }
            if self.last_time.is_none_or(|last| at > last) {
                self.last_time = Some(at);
            }
        }

        let text = msg.body();
        // dedup covers the text scan only; a share card always adds its URL
        let mut links = extract_urls(text);
        if let Some(url) = msg.share_url() {
            links.push(url.to_string());
        }
        for link in &links {
            *self.link_counts.entry(link.clone()).or_default() += 1;
        }

        if !links.is_empty() || char_len(text) > LONG_FORM_CHARS || msg.msg_type == MSG_TYPE_SHARE
        {
            self.signals.info_dense += 1;
        }
        if !msg.mentions.is_empty() {
            self.signals.mention_messages += 1;
        }
        if msg.is_question {
            self.signals.question_messages += 1;
        }
        if text.contains('!') || text.contains('！') {
            self.signals.exclaim_messages += 1;
        }
        let (pos, neg) = sentiment_signals(text, &msg.emojis);
        self.signals.sentiment_pos += pos;
        self.signals.sentiment_neg += neg;

        if msg.is_image() {
            self.image_count += 1;
        }

        if !text.is_empty() {
            for token in tokenize(text) {
                *self.token_counts.entry(token).or_default() += 1;
            }
            self.texts.push(text.to_string());
        }
    }

    pub fn unique_senders(&self) -> usize {
        self.sender_counts.len()
    }

    /// First hour holding the maximum count, 0 for an empty histogram
    pub fn peak_hour(&self) -> u32 {
        let mut peak = 0;
        for (hour, &count) in self.histogram.iter().enumerate() {
            if count > self.histogram[peak] {
                peak = hour;
            }
        }
        peak as u32
    }
}

/// Walk `messages` once, collecting day statistics and the question ledger.
///
/// Each message first gets the chance to answer earlier open questions and is
/// then considered as a new question itself.
pub fn scan(messages: &[Message], offset: &FixedOffset) -> (DayAggregate, QuestionLedger) {
    let mut day = DayAggregate::default();
    let mut ledger = QuestionLedger::new();

    for (index, msg) in messages.iter().enumerate() {
        let at = msg.time_in(offset);
        day.observe(msg, at);
        ledger.resolve(index, msg, at);
        ledger.track(index, msg, at);
    }

    tracing::debug!(
        messages = day.total,
        senders = day.unique_senders(),
        questions = ledger.len(),
        open = ledger.open_count(),
        "scanned day"
    );
    (day, ledger)
}
