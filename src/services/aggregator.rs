//! 已解决集合聚合器 - 业务能力层
//!
//! 一次拉取周期：先把两个句柄落盘（无论拉取结果如何，重试时不用
//! 重新输入），再清空集合，然后对有句柄的平台并发拉取。两个拉取
//! 互不影响，一边失败不妨碍另一边的结果入库；全部落定之后才产出
//! 状态行。

use tracing::{info, warn};

use crate::clients::SolvedFetch;
use crate::error::AppResult;
use crate::models::{Judge, SolvedSets};
use crate::store::{keys, KvStore};

/// 一次拉取周期的结果
#[derive(Debug)]
pub struct AggregateOutcome {
    /// 整体替换后的两个集合
    pub sets: SolvedSets,
    /// 面向用户的状态行
    pub status: String,
}

/// 已解决集合聚合器
///
/// 职责：
/// - 并发调度两个平台的拉取
/// - 全部落定后合并结果、产出状态行
/// - 不关心平台各自的重试策略（那是客户端的事）
pub struct SolvedAggregator {
    leetcode: Box<dyn SolvedFetch>,
    codeforces: Box<dyn SolvedFetch>,
}

impl SolvedAggregator {
    /// 创建新的聚合器
    pub fn new(leetcode: Box<dyn SolvedFetch>, codeforces: Box<dyn SolvedFetch>) -> Self {
        Self {
            leetcode,
            codeforces,
        }
    }

    /// 执行一次完整的拉取周期
    ///
    /// 空句柄的平台不发请求、不出现在状态行里。两个句柄都为空时
    /// 状态行提示输入句柄。
    pub async fn load(
        &self,
        leetcode_handle: &str,
        codeforces_handle: &str,
        store: &mut dyn KvStore,
    ) -> AppResult<AggregateOutcome> {
        let leetcode_handle = leetcode_handle.trim();
        let codeforces_handle = codeforces_handle.trim();

        // 句柄先落盘，拉取失败也不用重新输入
        store.set(keys::LEETCODE_HANDLE, leetcode_handle)?;
        store.set(keys::CODEFORCES_HANDLE, codeforces_handle)?;

        info!("开始拉取已解决题目记录...");

        let mut sets = SolvedSets::new();
        sets.clear();

        // 两个平台并发拉取，互不等待、互不取消
        let leetcode_fut = async {
            if leetcode_handle.is_empty() {
                None
            } else {
                Some(self.leetcode.fetch_solved(leetcode_handle).await)
            }
        };
        let codeforces_fut = async {
            if codeforces_handle.is_empty() {
                None
            } else {
                Some(self.codeforces.fetch_solved(codeforces_handle).await)
            }
        };
        let (leetcode_result, codeforces_result) = tokio::join!(leetcode_fut, codeforces_fut);

        let mut loaded = Vec::new();
        let mut errors = Vec::new();

        match leetcode_result {
            Some(Ok(ids)) => {
                loaded.push(format!("{} LeetCode solved", ids.len()));
                sets.replace(Judge::LeetCode, ids);
            }
            Some(Err(e)) => {
                warn!("LeetCode 拉取失败: {}", e);
                errors.push(format!(
                    "Error fetching LeetCode data: {} The API might be down.",
                    e
                ));
            }
            None => {}
        }

        match codeforces_result {
            Some(Ok(ids)) => {
                loaded.push(format!("{} Codeforces solved", ids.len()));
                sets.replace(Judge::Codeforces, ids);
            }
            Some(Err(e)) => {
                warn!("Codeforces 拉取失败 ({}): {}", codeforces_handle, e);
                errors.push(format!(
                    "Error fetching Codeforces data for {}.",
                    codeforces_handle
                ));
            }
            None => {}
        }

        let status = build_status(&loaded, &errors);
        info!("✓ 拉取周期结束: {}", status);

        Ok(AggregateOutcome { sets, status })
    }
}

/// 组装状态行：成功的用 Loaded 汇总，失败的逐条附在后面
fn build_status(loaded: &[String], errors: &[String]) -> String {
    let mut parts = Vec::new();

    if !loaded.is_empty() {
        parts.push(format!("Loaded: {}.", loaded.join(", ")));
    }
    parts.extend(errors.iter().cloned());

    if parts.is_empty() {
        "Enter a handle to load solved problems.".to_string()
    } else {
        parts.join(" ")
    }
}
