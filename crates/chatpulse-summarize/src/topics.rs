//! Keyword ranking and topic seeding

use crate::summary::{KeyCount, Topic};
use crate::text::char_len;
use std::collections::HashMap;

/// Top `k` entries by count descending, ties broken by key ascending
pub fn top_k(counts: &HashMap<String, usize>, k: usize) -> Vec<KeyCount> {
    let mut ranked: Vec<KeyCount> = counts
        .iter()
        .map(|(key, &count)| KeyCount {
            key: key.clone(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
    ranked.truncate(k);
    ranked
}

/// Keys only, same ordering as [`top_k`]
pub fn top_k_keys(counts: &HashMap<String, usize>, k: usize) -> Vec<String> {
    top_k(counts, k).into_iter().map(|kv| kv.key).collect()
}

/// Turn ranked keywords into topics.
///
/// A keyword becomes a topic when at least `min_messages` texts contain it
/// and it neither contains nor is contained by an accepted topic name.
pub fn extract_topics(
    keywords: &[KeyCount],
    texts: &[String],
    min_messages: usize,
    max_topics: usize,
) -> Vec<Topic> {
    let mut topics: Vec<Topic> = Vec::with_capacity(max_topics);

    for candidate in keywords.iter().map(|kv| kv.key.as_str()) {
        if topics.len() >= max_topics {
            break;
        }
        let matching: Vec<&String> = texts.iter().filter(|t| t.contains(candidate)).collect();
        if matching.len() < min_messages {
            continue;
        }
        let overlaps = topics
            .iter()
            .any(|t| t.name.contains(candidate) || candidate.contains(t.name.as_str()));
        if overlaps {
            tracing::trace!(candidate, "skipping overlapping topic");
            continue;
        }

        // strict `>` keeps the earliest of equally long texts
        let mut representative = "";
        let mut longest = 0;
        for text in &matching {
            let len = char_len(text);
            if len > longest {
                longest = len;
                representative = text.as_str();
            }
        }

        topics.push(Topic {
            name: candidate.to_string(),
            keywords: vec![candidate.to_string()],
            count: matching.len(),
            representative: representative.to_string(),
        });
    }
    topics
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, usize)]) -> HashMap<String, usize> {
        pairs.iter().map(|(k, c)| (k.to_string(), *c)).collect()
    }

    fn texts(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_top_k_ordering() {
        let ranked = top_k(&counts(&[("b", 2), ("a", 2), ("c", 5), ("d", 1)]), 3);
        let keys: Vec<_> = ranked.iter().map(|kv| kv.key.as_str()).collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_top_k_keys_tie_break() {
        let keys = top_k_keys(&counts(&[("https://z.io", 1), ("https://a.io", 1)]), 5);
        assert_eq!(keys, vec!["https://a.io", "https://z.io"]);
    }

    #[test]
    fn test_weak_topics_discarded() {
        let keywords = top_k(&counts(&[("deploy", 2)]), 20);
        let texts = texts(&["deploy now", "deploy later"]);
        assert!(extract_topics(&keywords, &texts, 3, 5).is_empty());
    }

    #[test]
    fn test_substring_topics_merged() {
        let keywords = top_k(&counts(&[("build", 5), ("rebuild", 4), ("cache", 3)]), 20);
        let texts = texts(&[
            "rebuild the cache",
            "build is red, cache again",
            "rebuild passed with cache",
            "another build",
        ]);
        let topics = extract_topics(&keywords, &texts, 3, 5);
        let names: Vec<_> = topics.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["build", "cache"]);
        assert_eq!(topics[0].count, 4);
        assert_eq!(topics[0].representative, "build is red, cache again");
    }

    #[test]
    fn test_max_topics() {
        let keywords = top_k(&counts(&[("aaa", 3), ("bbb", 3), ("ccc", 3)]), 20);
        let texts = texts(&["aaa bbb ccc", "aaa bbb ccc", "aaa bbb ccc"]);
        assert_eq!(extract_topics(&keywords, &texts, 3, 2).len(), 2);
    }
}
