//! TOML 文件存储
//!
//! 把键值表持久化为一个扁平的 TOML 文件。每次写入立即落盘
//! （写穿），文件不存在时从空表开始。

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::store::KvStore;

/// 文件存储
pub struct TomlStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl TomlStore {
    /// 打开（或初始化）一个状态文件
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| {
                AppError::store(format!("读取状态文件 {} 失败: {}", path.display(), e))
            })?;
            let entries: BTreeMap<String, String> = toml::from_str(&content).map_err(|e| {
                AppError::store(format!("解析状态文件 {} 失败: {}", path.display(), e))
            })?;
            info!("✓ 已加载状态文件: {} ({} 个键)", path.display(), entries.len());
            entries
        } else {
            debug!("状态文件 {} 不存在，从空状态开始", path.display());
            BTreeMap::new()
        };

        Ok(Self { path, entries })
    }

    /// 把当前内容写回文件
    fn save(&self) -> AppResult<()> {
        let content = toml::to_string(&self.entries).map_err(|e| {
            AppError::store(format!("序列化状态文件 {} 失败: {}", self.path.display(), e))
        })?;
        fs::write(&self.path, content).map_err(|e| {
            AppError::store(format!("写入状态文件 {} 失败: {}", self.path.display(), e))
        })?;
        Ok(())
    }
}

impl KvStore for TomlStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.save()
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        if self.entries.remove(key).is_some() {
            self.save()?;
        }
        Ok(())
    }
}
