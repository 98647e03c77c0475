//! OpenAI Chat Completions 互換 (/chat/completions) の返信生成器
//!
//! base_url で任意のエンドポイントを指定可能。ストリーミングは使わず、
//! 1 ターンにつき 1 回のブロッキング POST で返信を得る。

use crate::domain::{system_instruction_for_mode, Conversation};
use crate::ports::outbound::ReplyGenerator;
use common::error::Error;
use serde_json::{json, Value};
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
const DEFAULT_TEMPERATURE: f64 = 0.7;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// OpenAI Chat Completions 互換の返信生成器
pub struct OpenAiCompatReplyGenerator {
    model: String,
    base_url: String,
    api_key_env: Option<String>,
    temperature: f64,
    client: reqwest::blocking::Client,
}

impl OpenAiCompatReplyGenerator {
    /// 新しい返信生成器を作成
    ///
    /// * `model` - モデル名（None のとき DEFAULT_MODEL）
    /// * `base_url` - ベース URL（None のとき DEFAULT_BASE_URL）
    /// * `api_key_env` - API キーを読む環境変数名（None のとき Authorization を付けない）
    pub fn new(
        model: Option<String>,
        base_url: Option<String>,
        api_key_env: Option<String>,
    ) -> Result<Self, Error> {
        let model = model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::system(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            model,
            base_url,
            api_key_env,
            temperature: DEFAULT_TEMPERATURE,
            client,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn auth_header(&self) -> Option<String> {
        self.api_key_env
            .as_ref()
            .and_then(|name| env::var(name).ok())
            .filter(|key| !key.is_empty())
            .map(|key| format!("Bearer {}", key))
    }

    /// リクエストボディを組み立てる（mode の system 指示 + 会話全体）
    pub fn make_request_payload(&self, conversation: &Conversation) -> Value {
        let mut messages: Vec<Value> = Vec::new();
        if let Some(instruction) = system_instruction_for_mode(conversation.mode()) {
            messages.push(json!({ "role": "system", "content": instruction }));
        }
        for m in conversation.to_payload() {
            messages.push(json!({ "role": m.role, "content": m.content }));
        }
        json!({
            "model": self.model,
            "messages": messages,
            "temperature": self.temperature,
            "stream": false
        })
    }

    fn send(&self, payload: &Value) -> Result<String, Error> {
        let mut builder = self.client.post(self.url()).json(payload);
        if let Some(auth) = self.auth_header() {
            builder = builder.header("Authorization", auth);
        }

        let response = builder
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let error_msg = serde_json::from_str::<Value>(&response_text)
                .ok()
                .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
                .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text));
            return Err(Error::http(format!("Chat completions error: {}", error_msg)));
        }

        Ok(response_text)
    }
}

/// レスポンスから返信テキストを取り出す（content が無ければ空文字）
pub fn parse_response_text(response_json: &str) -> Result<String, Error> {
    let v: Value = serde_json::from_str(response_json)
        .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

    if let Some(err) = v.get("error") {
        let msg = err["message"].as_str().unwrap_or("Unknown error");
        return Err(Error::http(format!("API error: {}", msg)));
    }

    Ok(v["choices"][0]["message"]["content"]
        .as_str()
        .unwrap_or("")
        .to_string())
}

impl ReplyGenerator for OpenAiCompatReplyGenerator {
    fn name(&self) -> &str {
        "openai_compat"
    }

    fn generate(&self, conversation: &Conversation) -> Result<String, Error> {
        let payload = self.make_request_payload(conversation);
        let response = self.send(&payload)?;
        parse_response_text(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> OpenAiCompatReplyGenerator {
        OpenAiCompatReplyGenerator::new(None, Some("http://localhost:9/v1/".to_string()), None)
            .unwrap()
    }

    #[test]
    fn test_defaults_and_trailing_slash() {
        let g = generator();
        assert_eq!(g.model(), DEFAULT_MODEL);
        assert_eq!(g.url(), "http://localhost:9/v1/chat/completions");
        assert_eq!(g.name(), "openai_compat");
    }

    #[test]
    fn test_payload_for_chat_mode_is_conversation_only() {
        let mut conv = Conversation::new("chat");
        conv.add_user_message("Hi");
        conv.add_assistant_message("Hello");
        conv.add_user_message("How are you?");

        let payload = generator().make_request_payload(&conv);

        assert_eq!(payload["model"], DEFAULT_MODEL);
        assert_eq!(payload["stream"], false);
        let messages = payload["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0], json!({"role": "user", "content": "Hi"}));
        assert_eq!(messages[2]["content"], "How are you?");
        assert_eq!(conv.len(), 3);
    }

    #[test]
    fn test_payload_prepends_mode_instruction() {
        let mut conv = Conversation::new("coder");
        conv.add_user_message("fix my loop");
        let payload = generator().make_request_payload(&conv);
        let messages = payload["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert!(messages[0]["content"].as_str().unwrap().contains("coding"));
        assert_eq!(messages[1]["role"], "user");
    }

    #[test]
    fn test_parse_response_text() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"Hi there"}}]}"#;
        assert_eq!(parse_response_text(body).unwrap(), "Hi there");
    }

    #[test]
    fn test_parse_response_without_content_is_empty() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        assert_eq!(parse_response_text(body).unwrap(), "");
    }

    #[test]
    fn test_parse_response_api_error() {
        let body = r#"{"error":{"message":"quota exceeded"}}"#;
        let err = parse_response_text(body).unwrap_err();
        assert!(matches!(err, Error::Http(ref s) if s.contains("quota exceeded")));
    }

    #[test]
    fn test_parse_response_invalid_json() {
        let err = parse_response_text("not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_unreachable_endpoint_is_http_error() {
        let mut conv = Conversation::new("chat");
        conv.add_user_message("hello?");
        let err = generator().generate(&conv).unwrap_err();
        assert!(matches!(err, Error::Http(_)), "{:?}", err);
    }
}
