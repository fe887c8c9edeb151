//! 业务能力层（Services）
//!
//! 描述"我能做什么"，只处理单个拉取周期或单张题单，不关心流程顺序：
//! - `aggregator` - 并发拉取并合并两个平台的已解决集合
//! - `generator` - 生成并标注单张题单
//! - `prompts` - 四张题单的固定定义

pub mod aggregator;
pub mod generator;
pub mod prompts;

pub use aggregator::{AggregateOutcome, SolvedAggregator};
pub use generator::SheetGenerator;
