//! promptlab の設定型
//!
//! 元実装ではモデル名・温度・トークン上限が呼び出し箇所に直書きだったが、
//! ここでは文書化されたデフォルトを持つ設定値として扱う。
//! 設定ファイル（JSON）は任意で、欠けたフィールドはデフォルトで補う。

use serde::Deserialize;

use crate::error::Error;

/// デフォルトのモデル名
pub const DEFAULT_MODEL: &str = "gpt-4o";
/// デフォルトの API ベース URL（OpenAI Chat Completions 互換）
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// API キーを読むデフォルトの環境変数名
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
/// 両操作共通のデフォルト温度
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
/// generate のデフォルト最大出力トークン数
pub const GENERATION_MAX_TOKENS: u32 = 500;
/// improve_system_prompt のデフォルト最大出力トークン数
pub const REFINEMENT_MAX_TOKENS: u32 = 1000;

/// 1 操作分のサンプリングパラメータ
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub temperature: f64,
    pub max_tokens: u32,
}

/// promptlab 全体の設定
#[derive(Debug, Clone, PartialEq)]
pub struct PromptlabConfig {
    /// モデル名（固定。リクエストごとには変えない）
    pub model: String,
    /// Chat Completions 互換 API のベース URL
    pub base_url: String,
    /// API キーを読む環境変数名
    pub api_key_env: String,
    /// generate 用のサンプリングパラメータ
    pub generation: SamplingParams,
    /// improve_system_prompt 用のサンプリングパラメータ
    pub refinement: SamplingParams,
}

impl Default for PromptlabConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            generation: SamplingParams {
                temperature: DEFAULT_TEMPERATURE,
                max_tokens: GENERATION_MAX_TOKENS,
            },
            refinement: SamplingParams {
                temperature: DEFAULT_TEMPERATURE,
                max_tokens: REFINEMENT_MAX_TOKENS,
            },
        }
    }
}

/// serde 用の内部構造（全フィールド任意）
#[derive(Debug, Deserialize)]
struct ConfigRaw {
    model: Option<String>,
    base_url: Option<String>,
    api_key_env: Option<String>,
    generation: Option<SamplingRaw>,
    refinement: Option<SamplingRaw>,
}

#[derive(Debug, Deserialize)]
struct SamplingRaw {
    temperature: Option<f64>,
    max_tokens: Option<u32>,
}

impl SamplingParams {
    fn merged(self, raw: Option<SamplingRaw>) -> Self {
        match raw {
            Some(r) => Self {
                temperature: r.temperature.unwrap_or(self.temperature),
                max_tokens: r.max_tokens.unwrap_or(self.max_tokens),
            },
            None => self,
        }
    }
}

impl PromptlabConfig {
    /// JSON 文字列からパースし、欠けたフィールドをデフォルトで補う
    /// （ファイル読みは adapter::env::load_config で行う）
    pub fn parse(json: &str) -> Result<Self, Error> {
        let raw: ConfigRaw = serde_json::from_str(json)
            .map_err(|e| Error::config(format!("Invalid config JSON: {}", e)))?;
        let d = Self::default();
        Ok(Self {
            model: raw.model.unwrap_or(d.model),
            base_url: raw
                .base_url
                .unwrap_or(d.base_url)
                .trim_end_matches('/')
                .to_string(),
            api_key_env: raw.api_key_env.unwrap_or(d.api_key_env),
            generation: d.generation.merged(raw.generation),
            refinement: d.refinement.merged(raw.refinement),
        })
    }
}
