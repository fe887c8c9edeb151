//! 卡片文本组装
//!
//! 纯函数：把占位、题单、错误各自拼成一段文本。同样的文本既用于
//! 终端输出，也原样持久化到状态存储，下次启动不联网即可原样恢复。

use crate::models::SheetResult;

const CARD_WIDTH: usize = 72;

/// 主题横幅（一次生成周期或恢复显示的开头）
pub fn topic_banner(topic: &str) -> String {
    format!(
        "{}\nPractice sheets: {} ({})\n{}",
        "=".repeat(CARD_WIDTH),
        topic,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(CARD_WIDTH)
    )
}

/// 占位卡片（网络请求落定前先给用户看到的内容）
pub fn placeholder_card(title: &str) -> String {
    format!("── {} ──\n  ⏳ Generating...", title)
}

/// 完整题单卡片
///
/// 每行一题：已刷的用 ✔ 标出，未刷的留空；名字后跟难度/分数和链接。
pub fn sheet_card(title: &str, result: &SheetResult) -> String {
    let mut lines = Vec::with_capacity(result.len() + 2);
    lines.push(format!(
        "── {} ({} problems, {} solved) ──",
        title,
        result.len(),
        result.solved_count()
    ));

    for entry in &result.entries {
        let mark = if entry.solved { "✔" } else { " " };
        lines.push(format!(
            "  [{}] {} ({}) {}",
            mark, entry.problem.name, entry.problem.difficulty_or_rating, entry.problem.url
        ));
    }

    lines.join("\n")
}

/// 单张题单的内联错误卡片（不影响其余三张）
pub fn error_card(title: &str, message: &str) -> String {
    format!("── {} ──\n  ✗ Failed to load sheet. {}", title, message)
}
