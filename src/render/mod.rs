//! 渲染层
//!
//! 卡片文本的组装（`cards`）和输出（`SheetRenderer`）分开：组装是
//! 纯函数，输出是一个可替换的缝，测试里用记录型实现验证"先占位、
//! 后结果"的顺序。

pub mod cards;

pub use cards::{error_card, placeholder_card, sheet_card, topic_banner};

/// 界面输出契约
///
/// 职责：
/// - 把一段已组装好的文本展示给用户
/// - 不理解文本的业务含义、不做持久化
pub trait SheetRenderer: Send + Sync {
    /// 输出一个界面片段（横幅、占位、卡片、状态行）
    fn show(&self, fragment: &str);
}

/// 终端输出
#[derive(Debug, Default)]
pub struct TerminalRenderer;

impl TerminalRenderer {
    /// 创建终端渲染器
    pub fn new() -> Self {
        Self
    }
}

impl SheetRenderer for TerminalRenderer {
    fn show(&self, fragment: &str) {
        println!("{}\n", fragment);
    }
}
