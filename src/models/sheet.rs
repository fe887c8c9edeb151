//! 题单相关的数据类型
//!
//! `SheetRequest` 描述一次生成请求，每个生成周期新建四个实例；
//! `ProblemEntry` 是生成接口返回的单个题目；`SheetResult` 是
//! 按返回顺序标注完"是否已刷"之后的最终题单。

use serde::{Deserialize, Serialize};

use crate::models::judge::Judge;

/// 一次题单生成请求
#[derive(Debug, Clone)]
pub struct SheetRequest {
    /// 题单所属平台，决定用哪个已解决集合做标注
    pub kind: Judge,
    /// 卡片标题（固定的四个之一）
    pub title: String,
    /// 发给生成接口的完整提示词（已嵌入主题和随机种子）
    pub prompt: String,
}

/// 生成接口返回的单个题目
///
/// 字段名与响应 schema 一致，`unique_id` 的形状与对应平台的
/// 已解决标识一致（LeetCode 为 titleSlug，Codeforces 为 contestId-index）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemEntry {
    pub name: String,
    pub difficulty_or_rating: String,
    pub url: String,
    pub unique_id: String,
}

/// 生成接口内层 JSON 的整体结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetPayload {
    #[serde(default)]
    pub problems: Vec<ProblemEntry>,
}

/// 标注后的单个题目
#[derive(Debug, Clone)]
pub struct SheetEntry {
    pub problem: ProblemEntry,
    /// unique_id 命中对应平台已解决集合时为 true
    pub solved: bool,
}

/// 标注后的完整题单（保持生成接口返回的顺序）
#[derive(Debug, Clone, Default)]
pub struct SheetResult {
    pub entries: Vec<SheetEntry>,
}

impl SheetResult {
    /// 题目总数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 已刷题目数量
    pub fn solved_count(&self) -> usize {
        self.entries.iter().filter(|e| e.solved).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_field_names_match_schema() {
        let json = r#"{
            "problems": [
                {
                    "name": "Two Sum",
                    "difficulty_or_rating": "Easy",
                    "url": "https://leetcode.com/problems/two-sum/",
                    "unique_id": "two-sum"
                }
            ]
        }"#;

        let payload: SheetPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.problems.len(), 1);
        assert_eq!(payload.problems[0].unique_id, "two-sum");
        assert_eq!(payload.problems[0].difficulty_or_rating, "Easy");
    }

    #[test]
    fn test_payload_missing_problems_defaults_to_empty() {
        let payload: SheetPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.problems.is_empty());
    }

    #[test]
    fn test_solved_count() {
        let entry = |id: &str, solved: bool| SheetEntry {
            problem: ProblemEntry {
                name: id.to_string(),
                difficulty_or_rating: "Easy".to_string(),
                url: String::new(),
                unique_id: id.to_string(),
            },
            solved,
        };

        let result = SheetResult {
            entries: vec![entry("a", true), entry("b", false), entry("c", true)],
        };
        assert_eq!(result.len(), 3);
        assert_eq!(result.solved_count(), 2);
    }
}
