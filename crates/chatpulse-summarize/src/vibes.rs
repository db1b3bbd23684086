//! Composite "group vibe" score

use crate::phrases::{Reason, reason, tone_label};
use crate::summary::{GroupVibes, Tone};
use crate::text::{clamp01, round_to};
use chatpulse_core::Locale;

const ACTIVITY_MESSAGES_SCALE: f64 = 80.0;
const ACTIVITY_SENDERS_SCALE: f64 = 25.0;
const SENTIMENT_SCALE: f64 = 1.5;
/// Controversy level that reads as healthy debate
const BALANCE_TARGET: f64 = 0.35;

const WEIGHT_ACTIVITY: f64 = 0.35;
const WEIGHT_SENTIMENT: f64 = 0.30;
const WEIGHT_INFO: f64 = 0.20;
const WEIGHT_BALANCE: f64 = 0.15;

/// Per-day counters feeding the vibe score
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VibeSignals {
    pub info_dense: usize,
    pub mention_messages: usize,
    pub question_messages: usize,
    pub exclaim_messages: usize,
    pub sentiment_pos: f64,
    pub sentiment_neg: f64,
}

/// Sub-scores before rounding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub activity: f64,
    pub sentiment: f64,
    pub info_density: f64,
    pub controversy: f64,
    pub balanced: f64,
}

impl SubScores {
    pub fn compute(total: usize, unique_senders: usize, signals: &VibeSignals) -> Self {
        let t = total as f64;
        let activity = clamp01(
            t / ACTIVITY_MESSAGES_SCALE + unique_senders as f64 / ACTIVITY_SENDERS_SCALE,
        );
        let sentiment =
            clamp01(0.5 + (signals.sentiment_pos - signals.sentiment_neg) / (t * SENTIMENT_SCALE));
        let info_density = clamp01(signals.info_dense as f64 / t);
        let heated =
            signals.question_messages + signals.mention_messages + signals.exclaim_messages;
        let controversy = clamp01(heated as f64 / t);
        let balanced = clamp01(1.0 - (BALANCE_TARGET - controversy).abs() / BALANCE_TARGET);
        Self {
            activity,
            sentiment,
            info_density,
            controversy,
            balanced,
        }
    }

    /// Weighted composite in 0..=100
    pub fn score(&self) -> u32 {
        let weighted = self.activity * WEIGHT_ACTIVITY
            + self.sentiment * WEIGHT_SENTIMENT
            + self.info_density * WEIGHT_INFO
            + self.balanced * WEIGHT_BALANCE;
        (weighted * 100.0).round().clamp(0.0, 100.0) as u32
    }

    fn reasons(&self, messages: usize, senders: usize) -> Vec<Reason> {
        let mut out = Vec::new();
        if self.activity >= 0.7 {
            out.push(Reason::HighActivity { messages, senders });
        } else if self.activity <= 0.3 {
            out.push(Reason::LowActivity);
        }
        if self.sentiment >= 0.6 {
            out.push(Reason::PositiveTone);
        } else if self.sentiment <= 0.4 {
            out.push(Reason::NegativeContent);
        }
        if self.info_density >= 0.5 {
            out.push(Reason::DenseInformation);
        }
        if self.controversy >= 0.55 {
            out.push(Reason::HighControversy);
        } else if self.controversy <= 0.2 {
            out.push(Reason::CalmDiscussion);
        }
        out
    }
}

/// Score a day. An empty day yields an all-zero record.
pub fn score_vibes(
    total: usize,
    unique_senders: usize,
    signals: &VibeSignals,
    locale: Locale,
) -> GroupVibes {
    if total == 0 {
        return GroupVibes::default();
    }
    let sub = SubScores::compute(total, unique_senders, signals);
    let score = sub.score();
    let tone = Tone::from_score(score);

    let reasons = sub
        .reasons(total, unique_senders)
        .into_iter()
        .map(|r| reason(locale, r))
        .collect();

    tracing::debug!(score, ?tone, "scored group vibes");

    GroupVibes {
        score,
        activity: round_to(sub.activity, 2),
        sentiment: round_to(sub.sentiment, 2),
        info_density: round_to(sub.info_density, 2),
        controversy: round_to(sub.controversy, 2),
        tone: tone_label(locale, tone).to_string(),
        tone_key: Some(tone),
        reasons,
    }
}
