//! APIレスポンス型定義
//!
//! 3エンドポイント共通の形: 成功フィールドとerrorフィールドは排他。
//! どちらを採用するかの判定はparser側で行う。

use serde::Deserialize;

/// `POST /generate` のレスポンス
#[derive(Debug, Deserialize)]
pub struct GenerateReply {
    pub response: Option<String>,
    pub error: Option<String>,
}

/// `POST /analyze-image` のレスポンス
#[derive(Debug, Deserialize)]
pub struct AnalyzeReply {
    #[serde(rename = "imagePath")]
    pub image_path: Option<String>,
    pub analysis: Option<String>,
    pub error: Option<String>,
}

/// `POST /process-image` のレスポンス
///
/// messageフィールドはサーバーが付けてくるが画面には出さない
#[derive(Debug, Deserialize)]
pub struct ProcessReply {
    #[serde(rename = "processedImage")]
    pub processed_image: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}

/// 画像解析の成功結果
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// サーバー上のアップロード画像パス（次フローのoriginalImageになる）
    pub image_path: String,
    /// 解析テキスト
    pub analysis: String,
}
