//! 環境変数による設定取得（adapter 層）
//!
//! usecase は環境変数に直接依存せず、adapter 経由で取得する。

use std::env;
use std::fs;
use std::path::PathBuf;

use crate::adapter::config::PromptlabConfig;
use crate::error::Error;
use crate::ports::outbound::ApiKeyResolver;

/// 指定した環境変数から API キーを読む ApiKeyResolver 実装
pub struct EnvApiKey {
    env_name: String,
}

impl EnvApiKey {
    pub fn new(env_name: impl Into<String>) -> Self {
        Self {
            env_name: env_name.into(),
        }
    }
}

impl ApiKeyResolver for EnvApiKey {
    fn api_key(&self) -> Option<String> {
        env::var(&self.env_name).ok().filter(|s| !s.is_empty())
    }
}

/// PROMPTLAB_CONFIG が指す JSON ファイルから設定を読む（未設定ならデフォルト）
pub fn load_config() -> Result<PromptlabConfig, Error> {
    let path = match env::var("PROMPTLAB_CONFIG").ok().filter(|s| !s.is_empty()) {
        Some(p) => p,
        None => return Ok(PromptlabConfig::default()),
    };
    let content = fs::read_to_string(&path)
        .map_err(|e| Error::config(format!("Failed to read config {}: {}", path, e)))?;
    PromptlabConfig::parse(&content)
}

/// JSONL ログの出力先を環境変数 PROMPTLAB_LOG から取得
pub fn log_file_from_env() -> Option<PathBuf> {
    env::var("PROMPTLAB_LOG")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}
