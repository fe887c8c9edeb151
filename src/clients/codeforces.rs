//! Codeforces 提交记录客户端
//!
//! 官方接口 `user.status` 一次性返回全部提交，稳定性好，
//! 因此不做重试。verdict 为 OK 的提交按 `contestId-index`
//! 归并为已解决集合；缺 contestId 或 index 的记录（如部分
//! gym 提交）直接跳过。

use std::collections::HashSet;

use serde::Deserialize;
use tracing::{debug, info};

use crate::clients::SolvedFetch;
use crate::config::Config;
use crate::error::{AppError, AppResult};

use async_trait::async_trait;

/// Codeforces 客户端
pub struct CodeforcesClient {
    http: reqwest::Client,
    base_url: String,
}

/// user.status 响应信封
#[derive(Debug, Deserialize)]
struct UserStatusResponse {
    status: String,
    #[serde(default)]
    result: Vec<Submission>,
    comment: Option<String>,
}

/// 单条提交记录（只取用到的字段）
#[derive(Debug, Deserialize)]
struct Submission {
    verdict: Option<String>,
    problem: Option<ProblemRef>,
}

#[derive(Debug, Deserialize)]
struct ProblemRef {
    #[serde(rename = "contestId")]
    contest_id: Option<i64>,
    index: Option<String>,
}

impl CodeforcesClient {
    /// 创建新的 Codeforces 客户端
    pub fn new(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: config.codeforces_api_base_url.clone(),
        }
    }
}

/// 从提交列表归并出已通过题目的 `contestId-index` 集合
fn collect_accepted(submissions: &[Submission]) -> HashSet<String> {
    submissions
        .iter()
        .filter(|sub| sub.verdict.as_deref() == Some("OK"))
        .filter_map(|sub| {
            let problem = sub.problem.as_ref()?;
            let contest_id = problem.contest_id?;
            let index = problem.index.as_ref()?;
            Some(format!("{}-{}", contest_id, index))
        })
        .collect()
}

#[async_trait]
impl SolvedFetch for CodeforcesClient {
    async fn fetch_solved(&self, handle: &str) -> AppResult<HashSet<String>> {
        let url = format!("{}/user.status?handle={}&from=1", self.base_url, handle);
        debug!("拉取 Codeforces 提交记录: {}", url);

        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::malformed("Network response was not ok"));
        }

        let body: UserStatusResponse = response.json().await?;

        if body.status != "OK" {
            let comment = body
                .comment
                .unwrap_or_else(|| "Codeforces API error".to_string());
            return Err(AppError::api(comment));
        }

        let solved = collect_accepted(&body.result);
        info!("✓ 拉取到 {} 道 Codeforces 已解决题目 ({})", solved.len(), handle);
        Ok(solved)
    }
}
