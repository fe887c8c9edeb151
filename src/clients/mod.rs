//! 外部 API 客户端 - 基础设施层
//!
//! 三个只读/生成接口各一个客户端，共享同一个 `reqwest::Client`。
//! 两个 trait 是上层的可替换缝：聚合器只认 `SolvedFetch`，
//! 题单生成只认 `TextGenApi`，测试用手写 mock 替换。

pub mod codeforces;
pub mod gemini;
pub mod leetcode;

pub use codeforces::CodeforcesClient;
pub use gemini::GeminiClient;
pub use leetcode::LeetCodeClient;

use std::collections::HashSet;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::ProblemEntry;

/// 拉取某个句柄在一个判题平台上的已解决标识集合
#[async_trait]
pub trait SolvedFetch: Send + Sync {
    async fn fetch_solved(&self, handle: &str) -> AppResult<HashSet<String>>;
}

/// 按提示词生成一张题单的题目列表
#[async_trait]
pub trait TextGenApi: Send + Sync {
    async fn generate_problems(&self, api_key: &str, prompt: &str)
        -> AppResult<Vec<ProblemEntry>>;
}
