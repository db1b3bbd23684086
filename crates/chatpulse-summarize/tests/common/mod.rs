#![allow(dead_code)]

use chatpulse_core::{Message, Reference};

/// 2024-05-01 10:00:00 UTC
pub const T0: i64 = 1_714_557_600;

pub fn text(sender: &str, ts: i64, content: &str) -> Message {
    Message {
        sender_name: sender.to_string(),
        timestamp: ts,
        content: content.to_string(),
        msg_type: 1,
        is_question: content.contains('?') || content.contains('？'),
        ..Default::default()
    }
}

pub fn reply_to(sender: &str, ts: i64, content: &str, quoted_sender: &str) -> Message {
    Message {
        reference: Some(Reference {
            sender_name: quoted_sender.to_string(),
            ..Default::default()
        }),
        ..text(sender, ts, content)
    }
}

pub fn image(sender: &str, ts: i64) -> Message {
    Message {
        sender_name: sender.to_string(),
        timestamp: ts,
        msg_type: 3,
        ..Default::default()
    }
}

/// A busy evening: deploy chatter, a couple of questions, links and images
pub fn busy_day() -> Vec<Message> {
    let mut day = vec![
        text("Alice", T0, "今晚部署新版本吗?"),
        reply_to("Bob", T0 + 120, "对，部署脚本已经准备好了", "Alice"),
        text("Carol", T0 + 300, "部署文档在 https://docs.example.com/deploy 看一下"),
        text("Dave", T0 + 400, "部署前记得备份数据库！"),
        text("Alice", T0 + 900, "great, thanks"),
        image("Bob", T0 + 1000),
        text("Erin", T0 + 3700, "有人知道 flaky test 怎么处理?"),
        text("Carol", T0 + 3800, "https://docs.example.com/deploy 第二部分也要看"),
        text("Dave", T0 + 3900, "哈哈 nice"),
    ];
    let mut mention = text("Frank", T0 + 4000, "@Dave 备份做完了");
    mention.mentions = vec!["Dave".to_string()];
    day.push(mention);
    day
}
