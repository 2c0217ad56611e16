//! 2 つの中核操作: generate と improve_system_prompt
//!
//! エラーチャネルは操作ごとに意図的に異なる。
//! generate はプロバイダ失敗を "Error: …" のインライン文字列として成功値で返す
//! （出力欄は常に描画できる）。improve_system_prompt はプロバイダ失敗を
//! そのまま伝播し、呼び出し側が元のシステムプロンプトを据え置く。
//! API キー未設定はどちらもネットワーク呼び出し前に Config エラーで返す。

use std::sync::Arc;

use crate::adapter::SamplingParams;
use crate::domain::{build_refinement_prompt, Message};
use crate::error::Error;
use crate::ports::outbound::{
    now_iso8601, ApiKeyResolver, ChatCompletion, ChatRequest, Log, LogLevel, LogRecord,
};

/// content が欠落・空だったときに generate が返すフォールバック文字列
pub const NO_RESPONSE_FALLBACK: &str = "No response generated";

pub struct PlaygroundDeps {
    pub chat: Arc<dyn ChatCompletion>,
    pub api_key: Arc<dyn ApiKeyResolver>,
    pub log: Arc<dyn Log>,
    pub generation: SamplingParams,
    pub refinement: SamplingParams,
}

pub struct PlaygroundUseCase {
    deps: PlaygroundDeps,
}

impl PlaygroundUseCase {
    pub fn new(deps: PlaygroundDeps) -> Self {
        Self { deps }
    }

    fn require_api_key(&self) -> Result<(), Error> {
        if self.deps.api_key.api_key().is_none() {
            return Err(Error::config("API key is not configured"));
        }
        Ok(())
    }

    fn log_provider_failure(&self, operation: &str, e: &Error) {
        let _ = self.deps.log.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Warn,
            message: format!("provider call failed: {}", e),
            layer: Some("usecase".to_string()),
            kind: Some("provider".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("operation".to_string(), serde_json::json!(operation));
                Some(m)
            },
        });
    }

    /// system + user の 2 メッセージで 1 回のチャット完了を実行する。
    /// プロバイダ失敗は "Error: {説明}" の通常文字列として返る。
    pub fn generate(&self, user_message: &str, system_prompt: &str) -> Result<String, Error> {
        self.require_api_key()?;
        let request = ChatRequest {
            messages: vec![Message::system(system_prompt), Message::user(user_message)],
            temperature: self.deps.generation.temperature,
            max_tokens: self.deps.generation.max_tokens,
        };
        match self.deps.chat.complete(&request) {
            Ok(Some(text)) if !text.is_empty() => Ok(text),
            Ok(_) => Ok(NO_RESPONSE_FALLBACK.to_string()),
            Err(e) => {
                self.log_provider_failure("generate", &e);
                Ok(format!("Error: {}", e))
            }
        }
    }

    /// 4 入力を埋め込んだ改善指示を 1 つの user メッセージで送り、
    /// 置き換え用システムプロンプトを返す。プロバイダ失敗は伝播する。
    /// content が欠落・空なら元のシステムプロンプトに倒す。
    pub fn improve_system_prompt(
        &self,
        user_message: &str,
        system_prompt: &str,
        output: &str,
        feedback: &str,
    ) -> Result<String, Error> {
        self.require_api_key()?;
        let prompt = build_refinement_prompt(user_message, system_prompt, output, feedback);
        let request = ChatRequest {
            messages: vec![Message::user(prompt)],
            temperature: self.deps.refinement.temperature,
            max_tokens: self.deps.refinement.max_tokens,
        };
        match self.deps.chat.complete(&request).map_err(|e| {
            self.log_provider_failure("improve_system_prompt", &e);
            e
        })? {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Ok(system_prompt.to_string()),
        }
    }
}
