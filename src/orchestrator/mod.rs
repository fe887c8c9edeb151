//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责会话生命周期和流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `app` - 应用主结构
//! - 管理应用生命周期（初始化、命令循环、恢复）
//! - 持有状态存储、会话和两个服务
//! - 命令分发与最外层错误边界
//!
//! ### `generation` - 生成周期
//! - 校验输入、抽取随机种子、构造四个请求
//! - 四张题单并发处理，全部落定后持久化
//! - 输出单个周期的统计信息
//!
//! ## 层次关系
//!
//! ```text
//! app (会话 + 命令循环)
//!     ↓
//! generation (一次生成周期，四张题单)
//!     ↓
//! workflow::SheetFlow (处理单张题单)
//!     ↓
//! services (能力层：aggregator / generator / prompts)
//!     ↓
//! clients + store (基础设施：三个 HTTP 客户端、状态文件)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：app 管会话，generation 管一次周期
//! 2. **资源隔离**：只有编排层持有状态存储
//! 3. **失败隔离**：单张题单、单个平台的失败就地消化，不上抛

pub mod app;
pub mod generation;

// 重新导出主要类型
pub use app::App;
pub use generation::{run_generation_cycle, CycleStats};
