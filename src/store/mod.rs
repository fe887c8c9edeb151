//! 状态存储 - 基础设施层
//!
//! 跨会话持久化少量字符串键值（API key、两个句柄、上次的主题和
//! 题单内容）。所有写入都是独立键上的"后写覆盖"，没有并发竞争。

pub mod memory;
pub mod toml_store;

pub use memory::MemoryStore;
pub use toml_store::TomlStore;

use crate::error::AppResult;

/// 存储键名
pub mod keys {
    /// 生成接口的 API key
    pub const API_KEY: &str = "api_key";
    /// LeetCode 句柄
    pub const LEETCODE_HANDLE: &str = "leetcode_handle";
    /// Codeforces 句柄
    pub const CODEFORCES_HANDLE: &str = "codeforces_handle";
    /// 上次生成的全部卡片内容
    pub const LAST_GENERATED_SHEETS: &str = "last_generated_sheets";
    /// 上次生成的主题
    pub const LAST_TOPIC: &str = "last_topic";
}

/// 键值存储契约
///
/// 职责：
/// - 读写单个字符串键值
/// - 不理解键的业务含义
/// - 不出现会话、题单等上层概念
pub trait KvStore: Send + Sync {
    /// 读取一个键，不存在时返回 None
    fn get(&self, key: &str) -> Option<String>;

    /// 写入一个键（覆盖旧值）
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// 删除一个键（不存在时静默成功）
    fn remove(&mut self, key: &str) -> AppResult<()>;
}

/// 重置配置：清掉 API key 和上次生成结果，句柄保留
pub fn reset_configuration(store: &mut dyn KvStore) -> AppResult<()> {
    store.remove(keys::API_KEY)?;
    store.remove(keys::LAST_GENERATED_SHEETS)?;
    store.remove(keys::LAST_TOPIC)?;
    Ok(())
}
