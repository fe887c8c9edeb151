//! 已解决题目集合
//!
//! 两个平台各自维护一个标识集合。集合在每次拉取周期开始时整体清空、
//! 拉取成功后整体替换，绝不跨周期增量合并。
//! 标识比较是严格的字符串相等，不做任何归一化或大小写折叠。

use std::collections::HashSet;

use crate::models::judge::Judge;

/// 两个平台的已解决题目集合
#[derive(Debug, Default, Clone)]
pub struct SolvedSets {
    leetcode: HashSet<String>,
    codeforces: HashSet<String>,
}

impl SolvedSets {
    /// 创建空集合
    pub fn new() -> Self {
        Self::default()
    }

    /// 清空两个集合（每次拉取周期的第一步）
    pub fn clear(&mut self) {
        self.leetcode.clear();
        self.codeforces.clear();
    }

    /// 用新拉取的结果整体替换某个平台的集合
    pub fn replace(&mut self, judge: Judge, ids: HashSet<String>) {
        match judge {
            Judge::LeetCode => self.leetcode = ids,
            Judge::Codeforces => self.codeforces = ids,
        }
    }

    /// 判断某个标识是否在对应平台的集合中（严格相等）
    pub fn contains(&self, judge: Judge, unique_id: &str) -> bool {
        match judge {
            Judge::LeetCode => self.leetcode.contains(unique_id),
            Judge::Codeforces => self.codeforces.contains(unique_id),
        }
    }

    /// 某个平台的已解决数量
    pub fn count(&self, judge: Judge) -> usize {
        match judge {
            Judge::LeetCode => self.leetcode.len(),
            Judge::Codeforces => self.codeforces.len(),
        }
    }
}
