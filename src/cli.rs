//! 命令行交互命令
//!
//! 把用户输入的一行文本解析为命令。解析是纯函数，不触碰会话或
//! 存储；未知命令原样带回，由编排层提示。

/// 用户命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 保存生成接口的 API key
    SaveKey(String),
    /// 设置两个平台的句柄（"-" 表示清空对应句柄）
    SetHandles {
        leetcode: String,
        codeforces: String,
    },
    /// 用当前句柄拉取已解决题目
    LoadSolved,
    /// 为指定主题生成四张题单
    Generate(String),
    /// 重新显示上次生成的题单
    ShowLast,
    /// 重置配置（保留句柄）
    Reset,
    /// 显示帮助
    Help,
    /// 退出
    Quit,
    /// 未识别的命令
    Unknown(String),
}

/// 帮助文本
pub const HELP: &str = "\
Commands:
  key <api-key>              Save the generation API key
  handles <leetcode> <cf>    Set judge handles (use - to clear one)
  load                       Fetch solved problems for the saved handles
  gen <topic>                Generate four practice sheets for a topic
  last                       Show the last generated sheets again
  reset                      Clear the API key and saved sheets (handles stay)
  help                       Show this help
  quit                       Exit";

/// 解析一行输入；空行返回 None
pub fn parse(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (word, rest) = line
        .split_once(char::is_whitespace)
        .unwrap_or((line, ""));
    let rest = rest.trim();

    let command = match word {
        "key" => Command::SaveKey(rest.to_string()),
        "handles" => {
            let mut parts = rest.split_whitespace();
            Command::SetHandles {
                leetcode: handle_arg(parts.next()),
                codeforces: handle_arg(parts.next()),
            }
        }
        "load" => Command::LoadSolved,
        "gen" | "generate" => Command::Generate(rest.to_string()),
        "last" => Command::ShowLast,
        "reset" => Command::Reset,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    };

    Some(command)
}

/// "-" 是清空句柄的占位写法
fn handle_arg(arg: Option<&str>) -> String {
    match arg {
        None | Some("-") => String::new(),
        Some(value) => value.to_string(),
    }
}
