//! Outbound ポートの実装（adapter 層）

pub mod config;
pub mod env;
pub mod file_json_log;
pub mod openai_chat;
pub mod stdio_console;
#[cfg(test)]
pub mod stubs;

pub use config::{PromptlabConfig, SamplingParams};
pub use env::{load_config, log_file_from_env, EnvApiKey};
pub use file_json_log::{FileJsonLog, NoopLog, StderrLog};
pub use openai_chat::OpenAiChatCompletion;
pub use stdio_console::StdioConsole;
