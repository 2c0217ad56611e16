//! API クレデンシャル解決の Outbound ポート

/// API キーを解決する能力（環境変数など）
///
/// generate / improve_system_prompt の両方が、ネットワーク呼び出しの前に
/// それぞれ独立にキーの有無を確認する。
pub trait ApiKeyResolver: Send + Sync {
    /// API キーを返す（未設定・空文字なら None）
    fn api_key(&self) -> Option<String>;
}
