//! 题单生成服务 - 业务能力层
//!
//! 只负责"生成一张题单"：发一次生成请求，拿到题目列表后按本张
//! 题单所属平台的已解决集合逐条标注。标注是严格的字符串相等，
//! 跨平台的同名标识不算命中。

use tracing::debug;

use crate::clients::TextGenApi;
use crate::error::AppResult;
use crate::models::{Judge, ProblemEntry, SheetEntry, SheetRequest, SheetResult, SolvedSets};

/// 题单生成服务
///
/// 职责：
/// - 调用生成接口获取一张题单的题目
/// - 按平台集合标注"是否已刷"
/// - 不渲染、不持久化、不关心其余三张题单
pub struct SheetGenerator {
    api: Box<dyn TextGenApi>,
}

impl SheetGenerator {
    /// 创建新的生成服务
    pub fn new(api: Box<dyn TextGenApi>) -> Self {
        Self { api }
    }

    /// 生成并标注一张题单
    pub async fn generate(
        &self,
        api_key: &str,
        request: &SheetRequest,
        solved: &SolvedSets,
    ) -> AppResult<SheetResult> {
        debug!("生成题单 \"{}\" ({})", request.title, request.kind);

        let problems = self.api.generate_problems(api_key, &request.prompt).await?;

        Ok(mark_solved(request.kind, problems, solved))
    }
}

/// 按平台集合标注题目列表，保持返回顺序
pub fn mark_solved(kind: Judge, problems: Vec<ProblemEntry>, solved: &SolvedSets) -> SheetResult {
    let entries = problems
        .into_iter()
        .map(|problem| {
            let is_solved = solved.contains(kind, &problem.unique_id);
            SheetEntry {
                problem,
                solved: is_solved,
            }
        })
        .collect();

    SheetResult { entries }
}
