//! Gemini 文本生成客户端
//!
//! 调用 generateContent 接口，带 responseSchema 约束，要求模型
//! 直接返回 JSON。响应要解两层：先解信封拿到候选文本，再把
//! 文本本身当 JSON 解出题目列表。两层失败是不同的错误类别，
//! 便于排查到底是接口变了还是模型没按 schema 输出。
//!
//! ⚠️ API key 只出现在查询串里，任何日志都不得打印完整 URL。

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::clients::TextGenApi;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{ProblemEntry, SheetPayload};

use async_trait::async_trait;

/// Gemini 客户端
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

// ========== 响应信封 ==========

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiClient {
    /// 创建新的 Gemini 客户端
    pub fn new(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: config.gemini_api_base_url.clone(),
            model: config.gemini_model_name.clone(),
        }
    }
}

/// 构建 generateContent 请求体
///
/// responseSchema 固定四字段全必填，类型名按接口要求全大写。
fn build_request_body(prompt: &str) -> Value {
    json!({
        "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "problems": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "name": { "type": "STRING" },
                                "difficulty_or_rating": { "type": "STRING" },
                                "url": { "type": "STRING" },
                                "unique_id": {
                                    "type": "STRING",
                                    "description": "LeetCode titleSlug or Codeforces contestId-index"
                                }
                            },
                            "required": ["name", "difficulty_or_rating", "url", "unique_id"]
                        }
                    }
                },
                "required": ["problems"]
            }
        }
    })
}

/// 从失败响应体里抠出 error.message，抠不出来就退回状态码
fn extract_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(|m| m.to_string())
        })
        .unwrap_or_else(|| format!("HTTP {}", status))
}

/// 第一层解码：从信封里取出首个候选的文本
fn extract_generated_text(envelope: GenerateContentResponse) -> AppResult<String> {
    let candidate = envelope
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Envelope("缺少 candidates".to_string()))?;

    let content = candidate
        .content
        .ok_or_else(|| AppError::Envelope("候选缺少 content".to_string()))?;

    let part = content
        .parts
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Envelope("content 缺少 parts".to_string()))?;

    part.text
        .ok_or_else(|| AppError::Envelope("part 缺少 text".to_string()))
}

/// 第二层解码：把候选文本当 JSON 解出题目列表
///
/// 空列表按"没有题目"处理，与结构损坏区分开。
fn decode_payload(text: &str) -> AppResult<Vec<ProblemEntry>> {
    let payload: SheetPayload =
        serde_json::from_str(text).map_err(|e| AppError::Payload(e.to_string()))?;

    if payload.problems.is_empty() {
        return Err(AppError::NoProblems);
    }

    Ok(payload.problems)
}

#[async_trait]
impl TextGenApi for GeminiClient {
    async fn generate_problems(&self, api_key: &str, prompt: &str) -> AppResult<Vec<ProblemEntry>> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, api_key
        );
        debug!("调用 Gemini generateContent (model: {})", self.model);
        debug!("提示词: {}", crate::utils::logging::truncate_text(prompt, 120));

        let response = self
            .http
            .post(&url)
            .json(&build_request_body(prompt))
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;

        if !(200..300).contains(&status) {
            return Err(AppError::api(extract_error_message(status, &text)));
        }

        let envelope: GenerateContentResponse =
            serde_json::from_str(&text).map_err(|e| AppError::Envelope(e.to_string()))?;

        let generated = extract_generated_text(envelope)?;
        let problems = decode_payload(&generated)?;

        info!("✓ Gemini 返回 {} 道题目", problems.len());
        Ok(problems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_matches_structured_output_schema() {
        let body = build_request_body("list some problems");

        assert_eq!(body["contents"][0]["parts"][0]["text"], "list some problems");

        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");

        let schema = &config["responseSchema"];
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["required"], serde_json::json!(["problems"]));

        let items = &schema["properties"]["problems"]["items"];
        assert_eq!(items["type"], "OBJECT");
        assert_eq!(
            items["required"],
            serde_json::json!(["name", "difficulty_or_rating", "url", "unique_id"])
        );
        assert_eq!(
            items["properties"]["unique_id"]["description"],
            "LeetCode titleSlug or Codeforces contestId-index"
        );
    }

    #[test]
    fn test_double_decode_happy_path() {
        let inner = r#"{"problems":[{"name":"Two Sum","difficulty_or_rating":"Easy","url":"https://leetcode.com/problems/two-sum/","unique_id":"two-sum"}]}"#;
        let envelope: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": inner }] } }]
        }))
        .unwrap();

        let text = extract_generated_text(envelope).unwrap();
        let problems = decode_payload(&text).unwrap();

        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].unique_id, "two-sum");
        assert_eq!(problems[0].difficulty_or_rating, "Easy");
    }

    #[test]
    fn test_missing_candidates_is_envelope_error() {
        let envelope: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[]}"#).unwrap();

        let err = extract_generated_text(envelope).unwrap_err();
        assert!(matches!(err, AppError::Envelope(_)));
    }

    #[test]
    fn test_unparseable_inner_text_is_payload_error() {
        let err = decode_payload("这不是 JSON").unwrap_err();
        assert!(matches!(err, AppError::Payload(_)));
    }

    #[test]
    fn test_empty_problem_list_is_no_problems() {
        let err = decode_payload(r#"{"problems":[]}"#).unwrap_err();
        assert!(matches!(err, AppError::NoProblems));
        assert_eq!(err.to_string(), "No problems found in the response.");

        // problems 字段整个缺失时按空列表处理
        let err = decode_payload("{}").unwrap_err();
        assert!(matches!(err, AppError::NoProblems));
    }

    #[test]
    fn test_error_message_extraction() {
        let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(
            extract_error_message(400, body),
            "API key not valid. Please pass a valid API key."
        );

        assert_eq!(extract_error_message(502, "<html>Bad Gateway</html>"), "HTTP 502");
    }
}
