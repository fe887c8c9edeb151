//! 单张题单处理流程 - 流程层
//!
//! 核心职责：定义"一张题单"的完整处理流程
//!
//! 流程顺序：
//! 1. 先展示占位卡片（四张并发时用户立刻看到四个位置）
//! 2. 生成 → 标注
//! 3. 成功则展示题单卡片，失败则展示本张的内联错误卡片
//!
//! 任何一步失败都只影响本张题单，绝不向兄弟题单传播。

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::AppError;
use crate::models::{SheetRequest, SolvedSets};
use crate::render::{cards, SheetRenderer};
use crate::services::SheetGenerator;

/// 单张题单的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetOutcome {
    /// 生成并展示成功
    Generated,
    /// 生成失败，已展示内联错误
    Failed,
}

/// 处理完成的卡片（文本即持久化内容）
#[derive(Debug, Clone)]
pub struct SheetCard {
    pub title: String,
    pub text: String,
    pub outcome: SheetOutcome,
}

/// 单张题单处理流程
///
/// - 编排"占位 → 生成 → 标注 → 展示"的顺序
/// - 把失败就地转成错误卡片，永远不返回 Err
/// - 只依赖业务能力（generator）和输出缝（renderer）
pub struct SheetFlow {
    generator: SheetGenerator,
    renderer: Arc<dyn SheetRenderer>,
}

impl SheetFlow {
    /// 创建新的题单处理流程
    pub fn new(generator: SheetGenerator, renderer: Arc<dyn SheetRenderer>) -> Self {
        Self {
            generator,
            renderer,
        }
    }

    pub async fn run(
        &self,
        api_key: &str,
        request: SheetRequest,
        solved: &SolvedSets,
    ) -> SheetCard {
        // 网络请求落定前先占位
        self.renderer.show(&cards::placeholder_card(&request.title));

        match self.generator.generate(api_key, &request, solved).await {
            Ok(result) => {
                info!(
                    "✓ 题单 \"{}\" 完成: {} 道题，已刷 {}",
                    request.title,
                    result.len(),
                    result.solved_count()
                );
                let text = cards::sheet_card(&request.title, &result);
                self.renderer.show(&text);
                SheetCard {
                    title: request.title,
                    text,
                    outcome: SheetOutcome::Generated,
                }
            }
            Err(e) => {
                warn!("题单 \"{}\" 失败: {}", request.title, e);
                // 两层解码失败和空列表对用户是同一句话
                let message = if e.is_no_problems_kind() {
                    AppError::NoProblems.to_string()
                } else {
                    e.to_string()
                };
                let text = cards::error_card(&request.title, &message);
                self.renderer.show(&text);
                SheetCard {
                    title: request.title,
                    text,
                    outcome: SheetOutcome::Failed,
                }
            }
        }
    }
}
