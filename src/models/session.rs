//! 会话状态
//!
//! 一次进程运行对应一个会话。API key 和两个句柄在启动时从状态
//! 存储恢复；两个已解决集合只存在于会话内存里，每次拉取周期
//! 整体替换，重置配置时一并清空。

use crate::models::solved::SolvedSets;
use crate::store::{keys, KvStore};

/// 会话状态
#[derive(Debug, Default)]
pub struct Session {
    /// 生成接口的 API key，空串表示尚未配置
    pub api_key: String,
    /// LeetCode 句柄，空串表示未填写
    pub leetcode_handle: String,
    /// Codeforces 句柄，空串表示未填写
    pub codeforces_handle: String,
    /// 两个平台的已解决集合（不持久化）
    pub solved: SolvedSets,
}

impl Session {
    /// 从状态存储恢复会话（启动时调用一次）
    pub fn restore(store: &dyn KvStore) -> Self {
        Self {
            api_key: store.get(keys::API_KEY).unwrap_or_default(),
            leetcode_handle: store.get(keys::LEETCODE_HANDLE).unwrap_or_default(),
            codeforces_handle: store.get(keys::CODEFORCES_HANDLE).unwrap_or_default(),
            solved: SolvedSets::new(),
        }
    }

    /// 是否已配置 API key
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// 重置配置：清掉 API key 和两个已解决集合，句柄保留
    pub fn reset(&mut self) {
        self.api_key.clear();
        self.solved.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::judge::Judge;
    use crate::store::MemoryStore;
    use std::collections::HashSet;

    #[test]
    fn test_restore_reads_key_and_handles() {
        let mut store = MemoryStore::new();
        store.set(keys::API_KEY, "secret").unwrap();
        store.set(keys::LEETCODE_HANDLE, "alice").unwrap();
        store.set(keys::CODEFORCES_HANDLE, "bob").unwrap();

        let session = Session::restore(&store);
        assert!(session.has_api_key());
        assert_eq!(session.api_key, "secret");
        assert_eq!(session.leetcode_handle, "alice");
        assert_eq!(session.codeforces_handle, "bob");
        assert_eq!(session.solved.count(Judge::LeetCode), 0);
    }

    #[test]
    fn test_restore_from_empty_store() {
        let store = MemoryStore::new();
        let session = Session::restore(&store);
        assert!(!session.has_api_key());
        assert!(session.leetcode_handle.is_empty());
    }

    #[test]
    fn test_reset_clears_key_and_sets_keeps_handles() {
        let mut session = Session {
            api_key: "secret".to_string(),
            leetcode_handle: "alice".to_string(),
            codeforces_handle: "bob".to_string(),
            solved: SolvedSets::new(),
        };
        let mut ids = HashSet::new();
        ids.insert("two-sum".to_string());
        session.solved.replace(Judge::LeetCode, ids);

        session.reset();

        assert!(!session.has_api_key());
        assert_eq!(session.solved.count(Judge::LeetCode), 0);
        // 句柄保留，重试时不需要重新输入
        assert_eq!(session.leetcode_handle, "alice");
        assert_eq!(session.codeforces_handle, "bob");
    }
}
