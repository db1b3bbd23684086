//! Question ledger: opens an entry per trackable question and closes it when
//! a later message from someone else reads as the answer.

use crate::text::{char_len, normalize_name, unique_names};
use chatpulse_core::{MSG_TYPE_SHARE, MSG_TYPE_TEXT, Message};
use chrono::{DateTime, FixedOffset, Timelike};
use std::collections::BTreeMap;

/// A tracked question and, once answered, how it was answered
#[derive(Debug, Clone)]
pub struct LedgerEntry {
    /// Position of the question in the input
    pub index: usize,
    pub message: Message,
    pub asked_at: Option<DateTime<FixedOffset>>,
    pub mentions: Vec<String>,
    pub questioner: String,
    pub resolved: bool,
    pub response_minutes: f64,
    /// Hour of the answering message, `None` when its time is unknown
    pub response_hour: Option<u32>,
    /// Normalized identity -> display name
    pub responders: BTreeMap<String, String>,
}

impl LedgerEntry {
    fn open(index: usize, message: &Message, asked_at: Option<DateTime<FixedOffset>>) -> Self {
        Self {
            index,
            message: message.clone(),
            asked_at,
            mentions: unique_names(&message.mentions),
            questioner: normalize_name(message.sender_display()),
            resolved: false,
            response_minutes: 0.0,
            response_hour: None,
            responders: BTreeMap::new(),
        }
    }

    /// Does `msg` answer this question?
    fn is_answered_by(&self, msg: &Message) -> bool {
        let questioner = if self.questioner.is_empty() {
            normalize_name(self.message.sender_display())
        } else {
            self.questioner.clone()
        };
        if questioner.is_empty() {
            return false;
        }
        let responder = normalize_name(msg.sender_display());
        if responder.is_empty() || responder == questioner {
            return false;
        }

        if let Some(reference) = &msg.reference {
            if normalize_name(&reference.sender_name) == questioner {
                return true;
            }
            let quoted = reference.content.trim();
            let asked = self.message.content.trim();
            if !quoted.is_empty()
                && !asked.is_empty()
                && (asked.contains(quoted) || quoted.contains(asked))
            {
                return true;
            }
        }

        if msg.mentions.iter().any(|m| normalize_name(m) == questioner) {
            return true;
        }
        self.mentions
            .iter()
            .any(|target| normalize_name(target) == responder)
    }

    fn close(&mut self, msg: &Message, at: DateTime<FixedOffset>) {
        self.resolved = true;
        if let Some(asked) = self.asked_at {
            if at > asked {
                self.response_minutes = (at - asked).num_milliseconds() as f64 / 60_000.0;
            }
        }
        self.response_hour = Some(at.hour());
        let display = msg.sender_display();
        if !display.is_empty() {
            self.responders
                .insert(normalize_name(display), display.to_string());
        }
    }
}

/// Whether a message opens a new tracked question
pub fn is_trackable_question(msg: &Message) -> bool {
    if !msg.is_question {
        return false;
    }
    if !matches!(msg.msg_type, 0 | MSG_TYPE_TEXT | MSG_TYPE_SHARE) {
        return false;
    }
    let text = msg.body();
    !text.trim().is_empty() && char_len(text) >= 2
}

/// Ordered list of tracked questions
#[derive(Debug, Clone, Default)]
pub struct QuestionLedger {
    entries: Vec<LedgerEntry>,
}

impl QuestionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Let message `index` close every open question asked before it.
    ///
    /// A message with no known time answers nothing, and a resolved entry is
    /// never reconsidered.
    pub fn resolve(&mut self, index: usize, msg: &Message, at: Option<DateTime<FixedOffset>>) {
        let Some(at) = at else {
            return;
        };
        for entry in self.entries.iter_mut() {
            if entry.resolved || index <= entry.index {
                continue;
            }
            if entry.asked_at.is_some_and(|asked| at < asked) {
                continue;
            }
            if entry.is_answered_by(msg) {
                entry.close(msg, at);
                tracing::trace!(question = entry.index, answer = index, "question resolved");
            }
        }
    }

    /// Open an entry for message `index` if it is a trackable question
    pub fn track(&mut self, index: usize, msg: &Message, at: Option<DateTime<FixedOffset>>) {
        if is_trackable_question(msg) {
            self.entries.push(LedgerEntry::open(index, msg, at));
        }
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn open_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.resolved).count()
    }
}
