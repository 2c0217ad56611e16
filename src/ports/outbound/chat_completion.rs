//! チャット完了の Outbound ポート
//!
//! ストリーミングなしの単発リクエスト/レスポンスのみ。モデル名は adapter 側の
//! 固定設定で、リクエストごとには指定しない。

use crate::domain::Message;
use crate::error::Error;

/// 1 回分のチャット完了リクエスト
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// role 付きメッセージ列（順序どおり送信される）
    pub messages: Vec<Message>,
    pub temperature: f64,
    pub max_tokens: u32,
}

/// チャット完了を実行する能力
///
/// 実装は adapter::OpenAiChatCompletion（実プロバイダ）や StubChat（テスト用）など。
pub trait ChatCompletion: Send + Sync {
    /// 1 回のチャット完了を実行し、choices[0].message.content を返す。
    /// content が欠落していた場合は Ok(None)（フォールバックは呼び出し側の責務）。
    fn complete(&self, request: &ChatRequest) -> Result<Option<String>, Error>;
}
