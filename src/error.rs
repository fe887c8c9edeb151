//! 应用错误类型
//!
//! 错误分为五类：配置错误（同步拒绝，不发请求）、句柄不存在、
//! API 错误（非 2xx / 网络失败）、响应解析错误（信封 / 载荷 / 空结果
//! 三种独立区分）、存储错误。
//!
//! 面向用户的错误文案（会出现在状态行和卡片里的）保持英文原文，
//! 便于和判题平台返回的信息拼接；内部基础设施类错误使用中文。

use thiserror::Error;

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum AppError {
    /// 缺少必填输入（API key、主题等），在发出任何网络请求前同步拒绝
    #[error("{0}")]
    Config(String),

    /// 判题平台报告该句柄不存在（HTTP 404）
    #[error("User '{0}' not found.")]
    HandleNotFound(String),

    /// 判题平台返回非 2xx 状态码
    #[error("API returned status {0}.")]
    ApiStatus(u16),

    /// 生成接口返回的业务错误（携带远端错误信息）
    #[error("API Error: {0}")]
    Api(String),

    /// 响应整体结构不符合预期
    #[error("{0}")]
    Malformed(String),

    /// 生成接口外层信封解析失败（candidates/content/parts 缺失或非 JSON）
    #[error("Malformed response envelope: {0}")]
    Envelope(String),

    /// 生成内容本身（内层 JSON 字符串）解析失败
    #[error("Malformed generated payload: {0}")]
    Payload(String),

    /// 生成结果不含任何题目
    #[error("No problems found in the response.")]
    NoProblems,

    /// 本地状态文件读写失败
    #[error("存储错误: {0}")]
    Store(String),

    /// 网络请求失败
    #[error("网络请求失败: {0}")]
    Request(#[from] reqwest::Error),
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建配置错误
    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    /// 创建远端业务错误
    pub fn api(msg: impl Into<String>) -> Self {
        AppError::Api(msg.into())
    }

    /// 创建响应结构错误
    pub fn malformed(msg: impl Into<String>) -> Self {
        AppError::Malformed(msg.into())
    }

    /// 创建存储错误
    pub fn store(msg: impl Into<String>) -> Self {
        AppError::Store(msg.into())
    }

    /// 是否属于"解析不出题目"一类（用户看到的统一文案是 no problems found）
    pub fn is_no_problems_kind(&self) -> bool {
        matches!(
            self,
            AppError::Envelope(_) | AppError::Payload(_) | AppError::NoProblems
        )
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
