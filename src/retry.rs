//! 固定次数重试策略
//!
//! 把"最多 N 次、每次失败后等固定间隔"的重试循环收敛为一个可复用、
//! 可脱离网络单测的策略对象。最后一次尝试失败后不再等待，直接把
//! 最后一个错误原样返回。

use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};

/// 重试策略
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// 总尝试次数（含第一次）
    pub max_attempts: usize,
    /// 两次尝试之间的固定等待
    pub backoff: Duration,
}

impl RetryPolicy {
    /// 创建新的重试策略
    pub fn new(max_attempts: usize, backoff: Duration) -> Self {
        Self {
            max_attempts,
            backoff,
        }
    }

    /// 执行一个可重试的异步操作
    ///
    /// # 参数
    /// - `label`: 日志里标识这次操作的名称
    /// - `attempt_fn`: 每次尝试调用一次，返回本次尝试的结果
    ///
    /// # 返回
    /// 第一次成功的结果；全部失败时返回最后一次的错误
    pub async fn run<T, F, Fut>(&self, label: &str, mut attempt_fn: F) -> AppResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        let mut last_error = None;

        for attempt in 1..=self.max_attempts {
            debug!("{} - 第 {}/{} 次尝试", label, attempt, self.max_attempts);

            match attempt_fn().await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    warn!(
                        "{} - 第 {}/{} 次尝试失败: {}",
                        label, attempt, self.max_attempts, e
                    );
                    last_error = Some(e);

                    // 最后一次失败后不再等待
                    if attempt < self.max_attempts {
                        sleep(self.backoff).await;
                    }
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| AppError::config("重试策略的尝试次数必须大于 0".to_string())))
    }
}
