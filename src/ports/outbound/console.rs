//! 対話セッションの入出力ポート

use crate::error::Error;

/// セッション層の入出力（stdin/stdout またはテスト用スクリプト）
pub trait Console: Send + Sync {
    /// プロンプトを表示して 1 行読む。EOF なら Ok(None)。末尾改行は除く
    fn read_line(&self, prompt: &str) -> Result<Option<String>, Error>;

    /// 1 ブロックのテキストを表示する（末尾に改行を補う）
    fn print(&self, text: &str) -> Result<(), Error>;
}
