//! # Sheet Forge
//!
//! 一个按主题生成刷题题单的 Rust 应用程序：调用结构化输出的生成
//! 接口得到 LeetCode / Codeforces 题目列表，并用用户在两个判题平台
//! 的刷题记录逐条标注"是否已刷"。
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `clients/` - 三个 HTTP 客户端（LeetCode / Codeforces / Gemini）
//! - `store/` - 跨会话的键值状态文件
//! - `retry.rs` - 固定次数重试策略
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个周期或单张题单
//! - `SolvedAggregator` - 并发拉取并合并两个平台的已解决集合
//! - `SheetGenerator` - 生成并标注单张题单
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一张题单"的完整处理流程
//! - `SheetFlow` - 流程编排（占位 → 生成 → 标注 → 展示/报错）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/app` - 会话生命周期、启动恢复、命令分发
//! - `orchestrator/generation` - 一次生成周期，四张题单并发
//!
//! ## 模块结构

pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod render;
pub mod retry;
pub mod services;
pub mod store;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Judge, ProblemEntry, Session, SheetRequest, SheetResult, SolvedSets};
pub use orchestrator::{run_generation_cycle, App, CycleStats};
pub use retry::RetryPolicy;
pub use workflow::{SheetCard, SheetFlow, SheetOutcome};
