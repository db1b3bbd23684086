//! Text helpers shared by every pass: identity normalization, tokenization,
//! URL scanning and numeric rounding.

use chatpulse_core::lexicon::{
    NAME_STRIP_CHARS, URL_TRAILING_PUNCT, is_stopword_cn, is_stopword_en,
};
use std::collections::HashSet;

/// Length in Unicode code points
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Cut `s` to `max` code points, appending an ellipsis when shortened
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => format!("{}…", &s[..byte_idx]),
        None => s.to_string(),
    }
}

/// Han script ideographs, including extensions and compatibility blocks
pub fn is_han(c: char) -> bool {
    matches!(c,
        '\u{2E80}'..='\u{2E99}'
        | '\u{2E9B}'..='\u{2EF3}'
        | '\u{2F00}'..='\u{2FD5}'
        | '\u{3005}'
        | '\u{3007}'
        | '\u{3021}'..='\u{3029}'
        | '\u{3038}'..='\u{303B}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{F900}'..='\u{FA6D}'
        | '\u{FA70}'..='\u{FAD9}'
        | '\u{20000}'..='\u{2A6DF}'
        | '\u{2A700}'..='\u{2EBEF}'
        | '\u{2F800}'..='\u{2FA1F}'
        | '\u{30000}'..='\u{3134F}'
    )
}

/// Canonical form of a person's name for identity comparison.
///
/// Lowercases, drops decorative and zero-width characters, then keeps only
/// letters, digits, underscore and Han ideographs.
pub fn normalize_name(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !NAME_STRIP_CHARS.contains(c))
        .filter(|&c| is_name_char(c) || c == '_' || is_han(c))
        .collect()
}

/// Letters and decimal digits; numeric letters (Ⅷ, ²) and combining
/// diacritics do not count
fn is_name_char(c: char) -> bool {
    let letter = c.is_alphabetic() && !c.is_numeric() && !('\u{0300}'..='\u{036F}').contains(&c);
    let digit = c.is_ascii_digit() || ('\u{FF10}'..='\u{FF19}').contains(&c);
    letter || digit
}

/// Trimmed names deduplicated by normalized identity, first spelling kept
pub fn unique_names(names: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .filter(|n| {
            let key = normalize_name(n);
            !key.is_empty() && seen.insert(key)
        })
        .map(str::to_string)
        .collect()
}

/// Lowercase ASCII alphanumeric runs longer than two chars, minus stopwords
pub fn ascii_tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|run| !run.is_empty())
        .map(str::to_ascii_lowercase)
        .filter(|tok| tok.len() > 2 && !is_stopword_en(tok))
        .collect()
}

/// Overlapping 2- and 3-grams over each contiguous Han run, minus stopwords
pub fn han_grams(text: &str) -> Vec<String> {
    let mut grams = Vec::new();
    let mut run: Vec<char> = Vec::new();

    let mut flush = |run: &mut Vec<char>| {
        if run.len() >= 2 {
            for n in 2..=3 {
                for window in run.windows(n) {
                    let gram: String = window.iter().collect();
                    if !is_stopword_cn(&gram) {
                        grams.push(gram);
                    }
                }
            }
        }
        run.clear();
    };

    for c in text.chars() {
        if is_han(c) {
            run.push(c);
        } else {
            flush(&mut run);
        }
    }
    flush(&mut run);
    grams
}

/// All keyword candidates of a message
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = ascii_tokens(text);
    tokens.extend(han_grams(text));
    tokens
}

/// Whitespace-delimited `http(s)://` tokens, trailing punctuation stripped,
/// deduplicated within the message
pub fn extract_urls(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    text.split_whitespace()
        .filter(|part| part.starts_with("http://") || part.starts_with("https://"))
        .map(|part| part.trim_end_matches(|c| URL_TRAILING_PUNCT.contains(&c)))
        .filter(|url| seen.insert(*url))
        .map(str::to_string)
        .collect()
}

pub fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Round half away from zero to `digits` decimals
pub fn round_to(v: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits.max(0));
    (v * factor).round() / factor
}
