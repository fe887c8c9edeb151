//! 应用主结构 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：打开状态文件、恢复会话、装配客户端和流程
//! 2. **启动恢复**：上次生成的题单不联网直接展示
//! 3. **命令循环**：逐行读取命令并分发
//! 4. **错误边界**：配置类错误就地提示；编排自身的意外错误收敛为
//!    一条通用提示，绝不让进程退出
//!
//! ## 设计特点
//!
//! - **资源所有者**：唯一持有状态存储和会话的模块
//! - **向下委托**：拉取委托给 aggregator，生成委托给 generation

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

use crate::cli::{self, Command};
use crate::clients::{CodeforcesClient, GeminiClient, LeetCodeClient};
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::Session;
use crate::orchestrator::generation;
use crate::render::{cards, SheetRenderer, TerminalRenderer};
use crate::services::{SheetGenerator, SolvedAggregator};
use crate::store::{self, keys, KvStore, TomlStore};
use crate::workflow::SheetFlow;

/// 编排自身意外失败时的统一提示
const GENERIC_ALERT: &str = "An error occurred. Check your API key and console.";

/// 应用主结构
pub struct App {
    config: Config,
    store: Box<dyn KvStore>,
    session: Session,
    aggregator: SolvedAggregator,
    sheet_flow: SheetFlow,
    renderer: Arc<dyn SheetRenderer>,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> AppResult<Self> {
        let store: Box<dyn KvStore> = Box::new(TomlStore::load(&config.state_file)?);
        let session = Session::restore(store.as_ref());

        // 三个客户端共享一个连接池
        let http = reqwest::Client::new();
        let aggregator = SolvedAggregator::new(
            Box::new(LeetCodeClient::new(&config, http.clone())),
            Box::new(CodeforcesClient::new(&config, http.clone())),
        );

        let renderer: Arc<dyn SheetRenderer> = Arc::new(TerminalRenderer::new());
        let sheet_flow = SheetFlow::new(
            SheetGenerator::new(Box::new(GeminiClient::new(&config, http))),
            renderer.clone(),
        );

        Ok(Self {
            config,
            store,
            session,
            aggregator,
            sheet_flow,
            renderer,
        })
    }

    /// 运行命令循环
    pub async fn run(&mut self) -> AppResult<()> {
        log_startup(&self.session);

        // 上次生成的题单直接恢复，不发任何网络请求
        if !self.restore_last_sheets() {
            info!("没有可恢复的题单");
        }
        self.renderer.show(cli::HELP);

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            let Ok(Some(line)) = lines.next_line().await else {
                break;
            };
            match cli::parse(&line) {
                None => continue,
                Some(Command::Quit) => break,
                Some(command) => self.dispatch(command).await,
            }
        }

        info!("👋 退出");
        Ok(())
    }

    /// 分发单个命令；所有失败都就地转成用户提示
    async fn dispatch(&mut self, command: Command) {
        match command {
            Command::SaveKey(key) => self.handle_save_key(key),
            Command::SetHandles {
                leetcode,
                codeforces,
            } => self.handle_set_handles(leetcode, codeforces),
            Command::LoadSolved => self.handle_load_solved().await,
            Command::Generate(topic) => self.handle_generate(&topic).await,
            Command::ShowLast => {
                if !self.restore_last_sheets() {
                    self.renderer.show("No saved sheets yet.");
                }
            }
            Command::Reset => self.handle_reset(),
            Command::Help => self.renderer.show(cli::HELP),
            Command::Unknown(word) => {
                self.renderer
                    .show(&format!("Unknown command '{}'. Type 'help'.", word));
            }
            Command::Quit => unreachable!("quit 在循环里处理"),
        }
    }

    fn handle_save_key(&mut self, key: String) {
        let key = key.trim().to_string();
        if key.is_empty() {
            self.renderer.show("Please enter an API key.");
            return;
        }
        if let Err(e) = self.store.set(keys::API_KEY, &key) {
            error!("保存 API key 失败: {}", e);
            self.renderer.show(GENERIC_ALERT);
            return;
        }
        self.session.api_key = key;
        self.renderer.show("API key saved.");
    }

    fn handle_set_handles(&mut self, leetcode: String, codeforces: String) {
        self.session.leetcode_handle = leetcode;
        self.session.codeforces_handle = codeforces;
        // 句柄在拉取时落盘，这里只更新会话
        self.renderer
            .show("Handles updated. Run 'load' to fetch solved problems.");
    }

    async fn handle_load_solved(&mut self) {
        self.renderer.show("Fetching solved problems...");

        let result = self
            .aggregator
            .load(
                &self.session.leetcode_handle.clone(),
                &self.session.codeforces_handle.clone(),
                self.store.as_mut(),
            )
            .await;

        match result {
            Ok(outcome) => {
                self.session.solved = outcome.sets;
                self.renderer.show(&outcome.status);
            }
            Err(e) => {
                error!("拉取周期异常: {}", e);
                self.renderer.show(GENERIC_ALERT);
            }
        }
    }

    async fn handle_generate(&mut self, topic: &str) {
        let result = generation::run_generation_cycle(
            &self.sheet_flow,
            self.renderer.as_ref(),
            &self.session,
            self.store.as_mut(),
            &self.config,
            topic,
        )
        .await;

        match result {
            Ok(_) => {}
            // 配置类错误是面向用户的提示，原文展示
            Err(AppError::Config(message)) => self.renderer.show(&message),
            Err(e) => {
                error!("生成周期异常: {}", e);
                self.renderer.show(GENERIC_ALERT);
            }
        }
    }

    fn handle_reset(&mut self) {
        if let Err(e) = store::reset_configuration(self.store.as_mut()) {
            error!("重置配置失败: {}", e);
            self.renderer.show(GENERIC_ALERT);
            return;
        }
        self.session.reset();
        self.renderer
            .show("Configuration reset. Saved handles were kept.");
    }

    /// 展示上次持久化的题单；没有可恢复内容时返回 false
    fn restore_last_sheets(&self) -> bool {
        let (Some(container), Some(topic)) = (
            self.store.get(keys::LAST_GENERATED_SHEETS),
            self.store.get(keys::LAST_TOPIC),
        ) else {
            return false;
        };

        info!("✓ 已恢复上次生成的题单（主题: {}）", topic);
        self.renderer.show(&cards::topic_banner(&topic));
        self.renderer.show(&container);
        true
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(session: &Session) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 题单生成模式");
    info!(
        "🔑 API key: {}  句柄: LeetCode={:?} Codeforces={:?}",
        if session.has_api_key() { "已配置" } else { "未配置" },
        session.leetcode_handle,
        session.codeforces_handle
    );
    info!("{}", "=".repeat(60));
}
