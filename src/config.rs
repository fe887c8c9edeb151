/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// LeetCode 刷题记录 API 基地址
    pub leetcode_api_base_url: String,
    /// Codeforces API 基地址
    pub codeforces_api_base_url: String,
    /// 生成接口基地址
    pub gemini_api_base_url: String,
    /// 生成模型名称
    pub gemini_model_name: String,
    /// 本地状态文件路径
    pub state_file: String,
    /// 每张题单的题目数量
    pub problems_per_sheet: usize,
    /// LeetCode 拉取的最大尝试次数
    pub leetcode_max_attempts: usize,
    /// 两次尝试之间的等待秒数
    pub retry_delay_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            leetcode_api_base_url: "https://alfa-leetcode-api.onrender.com".to_string(),
            codeforces_api_base_url: "https://codeforces.com/api".to_string(),
            gemini_api_base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            gemini_model_name: "gemini-2.5-flash-preview-05-20".to_string(),
            state_file: "sheet_state.toml".to_string(),
            problems_per_sheet: 50,
            leetcode_max_attempts: 3,
            retry_delay_secs: 2,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            leetcode_api_base_url: std::env::var("LEETCODE_API_BASE_URL").unwrap_or(default.leetcode_api_base_url),
            codeforces_api_base_url: std::env::var("CODEFORCES_API_BASE_URL").unwrap_or(default.codeforces_api_base_url),
            gemini_api_base_url: std::env::var("GEMINI_API_BASE_URL").unwrap_or(default.gemini_api_base_url),
            gemini_model_name: std::env::var("GEMINI_MODEL_NAME").unwrap_or(default.gemini_model_name),
            state_file: std::env::var("SHEET_STATE_FILE").unwrap_or(default.state_file),
            problems_per_sheet: std::env::var("PROBLEMS_PER_SHEET").ok().and_then(|v| v.parse().ok()).unwrap_or(default.problems_per_sheet),
            leetcode_max_attempts: std::env::var("LEETCODE_MAX_ATTEMPTS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.leetcode_max_attempts),
            retry_delay_secs: std::env::var("RETRY_DELAY_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.retry_delay_secs),
        }
    }
}
