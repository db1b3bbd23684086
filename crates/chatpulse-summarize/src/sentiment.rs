//! Lexicon-based sentiment signals

use chatpulse_core::lexicon::{
    NEGATIVE_EMOJI, NEGATIVE_LEXICON, POSITIVE_EMOJI, POSITIVE_LEXICON,
};

const LEXICON_HIT: f64 = 1.0;
const EMOJI_HIT: f64 = 0.5;

/// Positive and negative weight of one message.
///
/// Each lexicon saturates at a single hit per message; bracket emojis add
/// half a point each on top.
pub fn sentiment_signals(text: &str, emojis: &[String]) -> (f64, f64) {
    if text.is_empty() && emojis.is_empty() {
        return (0.0, 0.0);
    }
    let lower = text.to_lowercase();
    let hits = |lexicon: &[&str]| {
        lexicon
            .iter()
            .any(|term| text.contains(term) || lower.contains(term))
    };

    let mut pos = if hits(POSITIVE_LEXICON) { LEXICON_HIT } else { 0.0 };
    let mut neg = if hits(NEGATIVE_LEXICON) { LEXICON_HIT } else { 0.0 };

    for emoji in emojis.iter().map(|e| e.trim()).filter(|e| !e.is_empty()) {
        if POSITIVE_EMOJI.contains(&emoji) {
            pos += EMOJI_HIT;
        }
        if NEGATIVE_EMOJI.contains(&emoji) {
            neg += EMOJI_HIT;
        }
    }
    (pos, neg)
}
