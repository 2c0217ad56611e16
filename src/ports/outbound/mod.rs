//! Outbound ポート（usecase が依存する外部能力の trait）

pub mod api_key;
pub mod chat_completion;
pub mod console;
pub mod log;

pub use api_key::ApiKeyResolver;
pub use chat_completion::{ChatCompletion, ChatRequest};
pub use console::Console;
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
