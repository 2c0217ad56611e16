//! OpenAI Chat Completions 互換 (/chat/completions) アダプタ
//!
//! base_url で任意の互換エンドポイントを指定可能。ストリーミングは使わない。

use serde_json::{json, Value};
use std::sync::Arc;

use crate::error::Error;
use crate::ports::outbound::{ApiKeyResolver, ChatCompletion, ChatRequest};

/// OpenAI Chat Completions 互換の ChatCompletion 実装
pub struct OpenAiChatCompletion {
    model: String,
    base_url: String,
    api_key: Arc<dyn ApiKeyResolver>,
}

impl OpenAiChatCompletion {
    /// * `model` - モデル名（設定で固定）
    /// * `base_url` - ベース URL（末尾スラッシュは落とす）
    /// * `api_key` - リクエスト時に Authorization を組み立てるためのキー解決
    pub fn new(
        model: impl Into<String>,
        base_url: impl Into<String>,
        api_key: Arc<dyn ApiKeyResolver>,
    ) -> Self {
        Self {
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn auth_header(&self) -> Option<String> {
        self.api_key.api_key().map(|key| format!("Bearer {}", key))
    }

    /// リクエストペイロードを生成
    pub fn make_request_payload(&self, request: &ChatRequest) -> Value {
        let messages: Vec<Value> = request
            .messages
            .iter()
            .map(|m| json!({ "role": m.role, "content": m.content }))
            .collect();
        json!({
            "model": self.model,
            "messages": messages,
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
            "stream": false
        })
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let mut builder = reqwest::blocking::Client::new()
            .post(self.url())
            .header("Content-Type", "application/json")
            .body(request_json.to_string());

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
            return Err(Error::http(format!(
                "Chat completions error: {}",
                extract_error_message(status, &response_text)
            )));
        }

        Ok(response_text)
    }

    /// レスポンスから choices[0].message.content を取り出す（欠落時は None）
    pub fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(err) = v.get("error") {
            let msg = err["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("API error: {}", msg)));
        }

        let text = v["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string());
        Ok(text)
    }
}

/// 非 2xx ボディから error.message を抽出（JSON でなければ生テキスト）
fn extract_error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(v) = serde_json::from_str::<Value>(body) {
        if let Some(msg) = v["error"]["message"].as_str() {
            return msg.to_string();
        }
    }
    format!("HTTP {}: {}", status, body)
}

impl ChatCompletion for OpenAiChatCompletion {
    fn complete(&self, request: &ChatRequest) -> Result<Option<String>, Error> {
        let payload = self.make_request_payload(request);
        let body = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;
        let response_text = self.make_http_request(&body)?;
        self.parse_response_text(&response_text)
    }
}
