//! Locale wording for tone labels, vibe reasons and highlights

use crate::summary::Tone;
use chatpulse_core::Locale;

pub fn tone_label(locale: Locale, tone: Tone) -> &'static str {
    match (locale, tone) {
        (Locale::Zh, Tone::Buzzing) => "群氛高涨",
        (Locale::Zh, Tone::Active) => "活跃良好",
        (Locale::Zh, Tone::Steady) => "讨论平稳",
        (Locale::Zh, Tone::Subdued) => "氛围偏冷",
        (Locale::En, Tone::Buzzing) => "Buzzing",
        (Locale::En, Tone::Active) => "Active",
        (Locale::En, Tone::Steady) => "Steady",
        (Locale::En, Tone::Subdued) => "Subdued",
    }
}

/// Why the vibe score came out the way it did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    HighActivity { messages: usize, senders: usize },
    LowActivity,
    PositiveTone,
    NegativeContent,
    DenseInformation,
    HighControversy,
    CalmDiscussion,
}

pub fn reason(locale: Locale, reason: Reason) -> String {
    match locale {
        Locale::Zh => match reason {
            Reason::HighActivity { messages, senders } => {
                format!("活跃度高（{messages} 条、{senders} 人参与）")
            }
            Reason::LowActivity => "消息量偏低，讨论热度不足".to_string(),
            Reason::PositiveTone => "情绪偏正向，互动轻松".to_string(),
            Reason::NegativeContent => "负面/吐槽内容偏多".to_string(),
            Reason::DenseInformation => "信息密度高（链接或长文较多）".to_string(),
            Reason::HighControversy => "争议度高，需要关注共识".to_string(),
            Reason::CalmDiscussion => "讨论较温和，可适度引导观点碰撞".to_string(),
        },
        Locale::En => match reason {
            Reason::HighActivity { messages, senders } => {
                format!("High activity ({messages} messages, {senders} participants)")
            }
            Reason::LowActivity => "Low message volume, little momentum".to_string(),
            Reason::PositiveTone => "Positive mood, relaxed interaction".to_string(),
            Reason::NegativeContent => "Noticeable negative or complaining content".to_string(),
            Reason::DenseInformation => {
                "High information density (many links or long posts)".to_string()
            }
            Reason::HighControversy => "High controversy, keep an eye on consensus".to_string(),
            Reason::CalmDiscussion => "Mild discussion, room for more debate".to_string(),
        },
    }
}

pub fn overview_line(locale: Locale, messages: usize, senders: usize, peak_hour: u32) -> String {
    match locale {
        Locale::Zh => format!(
            "消息 {messages} 条，活跃 {senders} 人；峰值 {peak_hour:02}:00-{peak_hour:02}:59"
        ),
        Locale::En => format!(
            "{messages} messages from {senders} people; peak {peak_hour:02}:00-{peak_hour:02}:59"
        ),
    }
}

fn list_separator(locale: Locale) -> &'static str {
    match locale {
        Locale::Zh => "、",
        Locale::En => ", ",
    }
}

pub fn top_senders_line(locale: Locale, parts: &[String]) -> String {
    let joined = parts.join(list_separator(locale));
    match locale {
        Locale::Zh => format!("Top 发送者：{joined}"),
        Locale::En => format!("Top senders: {joined}"),
    }
}

pub fn topics_line(locale: Locale, names: &[&str]) -> String {
    let joined = names.join(list_separator(locale));
    match locale {
        Locale::Zh => format!("热门主题：{joined}"),
        Locale::En => format!("Hot topics: {joined}"),
    }
}

pub fn links_line(locale: Locale, count: usize, host: Option<&str>) -> String {
    match (locale, host) {
        (Locale::Zh, Some(host)) => format!("热门链接 {count} 个，例如 {host}"),
        (Locale::Zh, None) => format!("热门链接 {count} 个"),
        (Locale::En, Some(host)) => format!("{count} popular links, e.g. {host}"),
        (Locale::En, None) => format!("{count} popular links"),
    }
}

pub fn images_line(locale: Locale, count: usize) -> String {
    match locale {
        Locale::Zh => format!("图片 {count} 张"),
        Locale::En => format!("{count} images"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_pads_hour() {
        assert_eq!(
            overview_line(Locale::Zh, 12, 4, 9),
            "消息 12 条，活跃 4 人；峰值 09:00-09:59"
        );
        assert_eq!(
            overview_line(Locale::En, 12, 4, 21),
            "12 messages from 4 people; peak 21:00-21:59"
        );
    }

    #[test]
    fn test_high_activity_reason_counts() {
        let text = reason(
            Locale::Zh,
            Reason::HighActivity {
                messages: 90,
                senders: 12,
            },
        );
        assert_eq!(text, "活跃度高（90 条、12 人参与）");
    }

    #[test]
    fn test_separators() {
        assert_eq!(topics_line(Locale::Zh, &["a", "b"]), "热门主题：a、b");
        assert_eq!(topics_line(Locale::En, &["a", "b"]), "Hot topics: a, b");
    }
}
