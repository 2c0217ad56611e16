//! エラーハンドリング
//!
//! crate 全体で使うエラー型。設定不備（ConfigurationError 相当）と
//! プロバイダ起因（Http / Json）を変種で区別し、伝播ポリシーは usecase 側で決める。

use thiserror::Error as ThisError;

/// promptlab 全体のエラー型
#[derive(Debug, Clone, ThisError)]
pub enum Error {
    /// 設定不備（API キー未設定・設定ファイル不正など）。ネットワーク呼び出し前に検出する
    #[error("{0}")]
    Config(String),
    /// HTTP・プロバイダ API のエラー
    #[error("{0}")]
    Http(String),
    /// JSON の生成・解析エラー
    #[error("{0}")]
    Json(String),
    /// 引数・状態遷移の不正（使い方の誤り）
    #[error("{0}")]
    InvalidArgument(String),
    /// I/O エラー
    #[error("{0}")]
    Io(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// 使い方の誤りか（main が usage を表示するかの判定に使う）
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// プロバイダ起因のエラーか（generate はこれをインライン文字列に変換する）
    pub fn is_provider(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Json(_))
    }

    /// sysexits 準拠の終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::Io(_) => 74,
            Self::Config(_) => 78,
            Self::Http(_) | Self::Json(_) => 70,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::invalid_argument("x").exit_code(), 64);
        assert_eq!(Error::http("x").exit_code(), 70);
        assert_eq!(Error::json("x").exit_code(), 70);
        assert_eq!(Error::io_msg("x").exit_code(), 74);
        assert_eq!(Error::config("x").exit_code(), 78);
    }

    #[test]
    fn test_display_is_message_only() {
        // generate が "Error: {e}" で整形するため、Display は裸のメッセージであること
        let e = Error::http("rate limit exceeded");
        assert_eq!(e.to_string(), "rate limit exceeded");
    }

    #[test]
    fn test_kind_predicates() {
        assert!(Error::invalid_argument("x").is_usage());
        assert!(!Error::config("x").is_usage());
        assert!(Error::http("x").is_provider());
        assert!(Error::json("x").is_provider());
        assert!(!Error::config("x").is_provider());
    }
}
