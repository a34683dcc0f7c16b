//! エラー型定義

use thiserror::Error;

/// エラー表示のフォールバック文言
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// 共通エラー型
///
/// 3系統のフローで共有するエラー分類:
/// - `Validation`: ローカル検証エラー（ネットワーク送信前）
/// - `Api`: サーバーがerrorフィールドまたは非2xxを返した
/// - `Transport`: fetch自体の失敗（接続断など）
/// - `Json`: レスポンスボディがJSONとしてパースできない
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Api(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// エラーパネルに表示する文言
    ///
    /// 検証エラーとAPIエラーはメッセージをそのまま表示し、
    /// 通信・パースエラーは汎用メッセージにフォールバックする
    pub fn user_message(&self) -> &str {
        match self {
            Error::Validation(msg) | Error::Api(msg) => msg,
            Error::Transport(_) | Error::Json(_) => GENERIC_ERROR_MESSAGE,
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
