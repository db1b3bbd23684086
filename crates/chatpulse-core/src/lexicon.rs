//! Static lexicon tables shared by ingestion and summarization.
//!
//! All tables are immutable and safe to share across concurrent summaries.

/// English tokens never counted as keywords
pub static STOPWORDS_EN: &[&str] = &[
    "the", "of", "and", "to", "in", "is", "for", "on", "with", "this", "that", "are", "be", "as",
    "by", "at", "from", "or", "not", "you", "your",
];

/// Chinese grams never counted as keywords
pub static STOPWORDS_CN: &[&str] = &[
    "我们", "你们", "他们", "这个", "那个", "一个", "以及", "因为", "所以", "而且", "可以", "的话",
    "如果", "就是", "不是", "没有", "应该", "需要", "可能", "相关", "进行", "关于", "还有", "已经",
    "什么", "怎么", "这种", "一些", "大家", "自己", "一下", "还是", "好的", "的", "了", "在", "是",
    "和", "不", "也", "都", "并", "很", "更", "及", "被", "就", "而",
];

/// Positive phrases; a message scores at most one hit
pub static POSITIVE_LEXICON: &[&str] = &[
    "哈哈", "[微笑]", "👍", "赞", "感谢", "给力", "稳", "太好了", "nice", "great", "perfect", "爽",
    "牛逼", "加油", "🎉",
];

/// Negative phrases; a message scores at most one hit
pub static NEGATIVE_LEXICON: &[&str] = &[
    "[捂脸]", "[泪]", "[汗]", "哭", "麻烦", "晕", "糟糕", "不行", "翻车", "崩", "麻了", "难顶",
    "bug", "问题", "??", "？？", "🙈", "😭", "😓", "😡",
];

/// Bracket emoji tokens worth +0.5 positive
pub static POSITIVE_EMOJI: &[&str] = &["微笑", "强", "赞", "OK"];

/// Bracket emoji tokens worth +0.5 negative
pub static NEGATIVE_EMOJI: &[&str] = &["捂脸", "汗", "泪", "抓狂", "怒"];

/// Characters removed from names before identity comparison
pub static NAME_STRIP_CHARS: &[char] = &[
    '\u{00a0}', '\u{2002}', '\u{2003}', '\u{2005}', '\u{2009}', '\u{200a}', '\u{200b}', '·', '•',
    '🔆', '✨', '🚀',
];

/// Wide spaces folded to ASCII space before mention extraction
pub static WIDE_SPACES: &[char] = &[
    '\u{00a0}', '\u{2002}', '\u{2003}', '\u{2005}', '\u{2009}', '\u{200a}',
];

/// Punctuation trimmed from both ends of an @-mention
pub static MENTION_TRIM_CHARS: &[char] = &[
    '，', '。', ',', '.', ';', '!', '?', '！', '？', '：', ':', '•', '·', ' ',
];

/// Zero-width and wide spaces trimmed after punctuation
pub static MENTION_TRIM_SPACES: &[char] = &[
    '\u{2005}', '\u{2002}', '\u{2003}', '\u{2009}', '\u{200a}', '\u{200b}',
];

/// Phrases that mark a message as a question even without a question mark
pub static QUESTION_KEYWORDS: &[&str] = &[
    "请问", "如何", "怎么", "是否", "能否", "可以吗", "有没有", "能不能", "麻烦", "help",
    "any idea", "why",
];

/// Trailing characters stripped from scanned URLs
pub static URL_TRAILING_PUNCT: &[char] = &[',', '.', ';', '!', '?', ')', ']', '}'];

pub fn is_stopword_en(token: &str) -> bool {
    STOPWORDS_EN.contains(&token)
}

pub fn is_stopword_cn(gram: &str) -> bool {
    STOPWORDS_CN.contains(&gram)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopwords() {
        assert!(is_stopword_en("the"));
        assert!(!is_stopword_en("rust"));
        assert!(is_stopword_cn("我们"));
        assert!(!is_stopword_cn("编译"));
    }

    #[test]
    fn test_tables_have_no_blank_entries() {
        for table in [STOPWORDS_EN, STOPWORDS_CN, POSITIVE_LEXICON, NEGATIVE_LEXICON] {
            assert!(table.iter().all(|t| !t.trim().is_empty()));
        }
    }
}
