//! 生成周期 - 编排层
//!
//! 一次完整的生成周期：校验输入 → 抽一个随机种子 → 构造四个请求 →
//! 四张题单并发处理 → 全部落定后把容器内容和主题落盘。
//!
//! 四张题单互相独立：快的先出，慢的不挡路，单张失败只在自己的
//! 卡片里报错。落盘按请求顺序拼接，与完成顺序无关。

use futures::future::join_all;
use rand::Rng;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::Session;
use crate::render::{cards, SheetRenderer};
use crate::services::prompts;
use crate::store::{keys, KvStore};
use crate::workflow::{SheetFlow, SheetOutcome};

/// 一次生成周期的统计
#[derive(Debug, Default, Clone, Copy)]
pub struct CycleStats {
    pub generated: usize,
    pub failed: usize,
}

/// 执行一次完整的生成周期
///
/// 配置类错误（没有 API key、主题为空）在发出任何网络请求前
/// 同步拒绝；单张题单的失败不会出现在返回值里，只体现在统计中。
pub async fn run_generation_cycle(
    flow: &SheetFlow,
    renderer: &dyn SheetRenderer,
    session: &Session,
    store: &mut dyn KvStore,
    config: &Config,
    topic: &str,
) -> AppResult<CycleStats> {
    if !session.has_api_key() {
        return Err(AppError::config("Please save your API key first."));
    }

    let topic = topic.trim();
    if topic.is_empty() {
        return Err(AppError::config("Please enter a topic."));
    }

    // 每个周期新抽一个种子，四个提示词共用，避免远端模型返回缓存结果
    let seed: u32 = rand::rng().random_range(0..10_000);
    debug!("本周期随机种子: {}", seed);

    log_cycle_start(topic);
    renderer.show(&cards::topic_banner(topic));

    let requests = prompts::sheet_requests(topic, seed, config.problems_per_sheet);

    // 四张题单并发，全部落定（而非全部成功）后才继续
    let sheet_cards = join_all(
        requests
            .into_iter()
            .map(|request| flow.run(&session.api_key, request, &session.solved)),
    )
    .await;

    let mut stats = CycleStats::default();
    for card in &sheet_cards {
        match card.outcome {
            SheetOutcome::Generated => stats.generated += 1,
            SheetOutcome::Failed => stats.failed += 1,
        }
    }

    // 按请求顺序持久化，下次启动不联网即可恢复
    let container = sheet_cards
        .iter()
        .map(|card| card.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");
    store.set(keys::LAST_GENERATED_SHEETS, &container)?;
    store.set(keys::LAST_TOPIC, topic)?;

    log_cycle_complete(&stats);
    Ok(stats)
}

// ========== 日志辅助函数 ==========

fn log_cycle_start(topic: &str) {
    info!("{}", "=".repeat(60));
    info!("📝 开始生成周期: \"{}\"（四张题单并发）", topic);
    info!("{}", "=".repeat(60));
}

fn log_cycle_complete(stats: &CycleStats) {
    info!("{}", "─".repeat(60));
    info!("✓ 生成周期结束: 成功 {}/4，失败 {}", stats.generated, stats.failed);
    info!("{}", "─".repeat(60));
}
