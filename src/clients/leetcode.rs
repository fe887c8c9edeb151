//! LeetCode 刷题记录客户端
//!
//! 走第三方镜像接口 `GET /{handle}/solved`。该接口可用性很差，
//! 是全系统唯一带重试的调用：固定 3 次、间隔 2 秒。
//! 记录里缺 titleSlug 的条目静默跳过，整体结构不对才算错误。

use std::collections::HashSet;

use serde_json::Value;
use tracing::{debug, info};

use crate::clients::SolvedFetch;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::retry::RetryPolicy;

use async_trait::async_trait;

/// LeetCode 客户端
pub struct LeetCodeClient {
    http: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl LeetCodeClient {
    /// 创建新的 LeetCode 客户端
    pub fn new(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: config.leetcode_api_base_url.clone(),
            retry: RetryPolicy::new(
                config.leetcode_max_attempts,
                std::time::Duration::from_secs(config.retry_delay_secs),
            ),
        }
    }

    /// 单次拉取（不含重试）
    async fn fetch_once(&self, handle: &str) -> AppResult<HashSet<String>> {
        let url = format!("{}/{}/solved", self.base_url, handle);
        debug!("拉取 LeetCode 刷题记录: {}", url);

        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            if response.status().as_u16() == 404 {
                return Err(AppError::HandleNotFound(handle.to_string()));
            }
            return Err(AppError::ApiStatus(response.status().as_u16()));
        }

        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text)
            .map_err(|_| AppError::malformed("Invalid data structure from LeetCode API."))?;

        extract_slugs(&body)
            .ok_or_else(|| AppError::malformed("Invalid data structure from LeetCode API."))
    }
}

/// 从响应体中提取 titleSlug 集合
///
/// 返回 None 表示整体结构不对（缺 solvedProblem 数组）；
/// 单个条目缺 titleSlug 时跳过，不算错误。
fn extract_slugs(body: &Value) -> Option<HashSet<String>> {
    let records = body.get("solvedProblem")?.as_array()?;

    let slugs = records
        .iter()
        .filter_map(|record| record.get("titleSlug").and_then(|v| v.as_str()))
        .map(|slug| slug.to_string())
        .collect();

    Some(slugs)
}

#[async_trait]
impl SolvedFetch for LeetCodeClient {
    async fn fetch_solved(&self, handle: &str) -> AppResult<HashSet<String>> {
        let slugs = self
            .retry
            .run("LeetCode 刷题记录拉取", || self.fetch_once(handle))
            .await?;

        info!("✓ 拉取到 {} 道 LeetCode 已解决题目 ({})", slugs.len(), handle);
        Ok(slugs)
    }
}
