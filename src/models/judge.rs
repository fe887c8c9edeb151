//! 判题平台枚举

use std::fmt;

/// 判题平台
///
/// 每张题单、每个刷题记录集合都属于其中一个平台，
/// 题目标识在平台各自的命名空间内唯一。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Judge {
    /// LeetCode（标识为 titleSlug）
    LeetCode,
    /// Codeforces（标识为 contestId-index）
    Codeforces,
}

impl Judge {
    /// 平台显示名称
    pub fn name(&self) -> &'static str {
        match self {
            Judge::LeetCode => "LeetCode",
            Judge::Codeforces => "Codeforces",
        }
    }
}

impl fmt::Display for Judge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
