//! 四张题单的固定定义
//!
//! 每个生成周期构造四个 `SheetRequest`：LeetCode 按通过率最高/最低
//! 各一张，Codeforces 按解题人数最多/最少各一张。四张题单共用同一个
//! 随机种子，避免远端模型对同一主题返回缓存的重复结果。

use crate::models::{Judge, SheetRequest};

/// 四张题单的固定标题（顺序即请求顺序）
pub const SHEET_TITLES: [&str; 4] = [
    "LeetCode - Most Accepted",
    "LeetCode - Less Accepted",
    "Codeforces - Most Solved",
    "Codeforces - Less Solved",
];

/// 构造一个生成周期的四个请求
///
/// # 参数
/// - `topic`: 用户输入的主题
/// - `seed`: 本周期新抽取的随机种子，嵌入每个提示词
/// - `count`: 每张题单的题目数量
pub fn sheet_requests(topic: &str, seed: u32, count: usize) -> Vec<SheetRequest> {
    vec![
        SheetRequest {
            kind: Judge::LeetCode,
            title: SHEET_TITLES[0].to_string(),
            prompt: format!(
                "Generate a list of {count} LeetCode problems on \"{topic}\". \
                 Use random seed {seed} to ensure variety. \
                 Sort by difficulty (Easy, Medium, Hard), then by highest acceptance rate. \
                 Provide name, difficulty, URL, and the unique titleSlug."
            ),
        },
        SheetRequest {
            kind: Judge::LeetCode,
            title: SHEET_TITLES[1].to_string(),
            prompt: format!(
                "Generate a list of {count} LeetCode problems on \"{topic}\". \
                 Use random seed {seed} to ensure variety. \
                 Sort by difficulty (Easy, Medium, Hard), then by lowest acceptance rate. \
                 Provide name, difficulty, URL, and the unique titleSlug."
            ),
        },
        SheetRequest {
            kind: Judge::Codeforces,
            title: SHEET_TITLES[2].to_string(),
            prompt: format!(
                "Generate a list of {count} Codeforces problems on \"{topic}\". \
                 Use random seed {seed} to ensure variety. \
                 Sort by rating (lowest to highest). Pick the most solved problems. \
                 Provide name, rating, URL, and a unique ID (contestId-index)."
            ),
        },
        SheetRequest {
            kind: Judge::Codeforces,
            title: SHEET_TITLES[3].to_string(),
            prompt: format!(
                "Generate a list of {count} Codeforces problems on \"{topic}\". \
                 Use random seed {seed} to ensure variety. \
                 Sort by rating (lowest to highest). Pick the least solved problems. \
                 Provide name, rating, URL, and a unique ID (contestId-index)."
            ),
        },
    ]
}
