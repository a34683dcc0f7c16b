//! APIレスポンスパーサー
//!
//! fetch結果の `(ok, body)` からフローごとの成功値またはエラーを導く。
//! 判定順序はすべてのフローで共通:
//! 1. ボディがJSONでない -> Jsonエラー
//! 2. 非2xx -> errorフィールド、なければフォールバック文言
//! 3. 2xxでもerrorフィールドがあれば失敗扱い
//! 4. 成功フィールド欠落 -> フォールバック文言

use crate::error::{Error, Result};
use crate::types::{Analysis, AnalyzeReply, GenerateReply, ProcessReply};

/// テキスト生成のフォールバック文言
pub const MSG_GENERATE_FAILED: &str = "Failed to generate response";
/// 画像解析のフォールバック文言
pub const MSG_ANALYZE_FAILED: &str = "Failed to analyze image";
/// 画像加工のフォールバック文言
pub const MSG_PROCESS_FAILED: &str = "Failed to process image";

fn settle(ok: bool, error: Option<String>, fallback: &str) -> Result<()> {
    if !ok {
        return Err(Error::Api(error.unwrap_or_else(|| fallback.to_string())));
    }
    if let Some(message) = error {
        return Err(Error::Api(message));
    }
    Ok(())
}

/// `/generate` レスポンスをパースする
///
/// # Arguments
/// * `ok` - HTTPステータスが2xxだったか
/// * `body` - レスポンスボディ
pub fn parse_generate(ok: bool, body: &str) -> Result<String> {
    let reply: GenerateReply = serde_json::from_str(body)?;
    settle(ok, reply.error, MSG_GENERATE_FAILED)?;
    reply
        .response
        .ok_or_else(|| Error::Api(MSG_GENERATE_FAILED.to_string()))
}

/// `/analyze-image` レスポンスをパースする
pub fn parse_analyze(ok: bool, body: &str) -> Result<Analysis> {
    let reply: AnalyzeReply = serde_json::from_str(body)?;
    settle(ok, reply.error, MSG_ANALYZE_FAILED)?;
    match (reply.image_path, reply.analysis) {
        (Some(image_path), Some(analysis)) => Ok(Analysis {
            image_path,
            analysis,
        }),
        _ => Err(Error::Api(MSG_ANALYZE_FAILED.to_string())),
    }
}

/// `/process-image` レスポンスをパースし、加工済み画像URLを返す
pub fn parse_process(ok: bool, body: &str) -> Result<String> {
    let reply: ProcessReply = serde_json::from_str(body)?;
    settle(ok, reply.error, MSG_PROCESS_FAILED)?;
    reply
        .processed_image
        .ok_or_else(|| Error::Api(MSG_PROCESS_FAILED.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // /generate
    // =============================================

    #[test]
    fn test_parse_generate_success() {
        let result = parse_generate(true, r#"{"response": "Hello"}"#).expect("パース失敗");
        assert_eq!(result, "Hello");
    }

    #[test]
    fn test_parse_generate_http_error_with_message() {
        // HTTP 500 + errorフィールド
        let err = parse_generate(false, r#"{"error": "rate limited"}"#).unwrap_err();
        assert_eq!(err.user_message(), "rate limited");
    }

    #[test]
    fn test_parse_generate_http_error_without_message() {
        let err = parse_generate(false, r#"{}"#).unwrap_err();
        assert_eq!(err.user_message(), MSG_GENERATE_FAILED);
    }

    #[test]
    fn test_parse_generate_error_field_on_200() {
        // 2xxでもerrorフィールドは失敗扱い
        let err = parse_generate(true, r#"{"error": "quota exceeded"}"#).unwrap_err();
        assert_eq!(err.user_message(), "quota exceeded");
    }

    #[test]
    fn test_parse_generate_invalid_json() {
        let err = parse_generate(true, "<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_parse_generate_missing_response_field() {
        let err = parse_generate(true, r#"{}"#).unwrap_err();
        assert_eq!(err.user_message(), MSG_GENERATE_FAILED);
    }

    // =============================================
    // /analyze-image
    // =============================================

    #[test]
    fn test_parse_analyze_success() {
        let body = r#"{"imagePath": "/img/1.png", "analysis": "A cat"}"#;
        let result = parse_analyze(true, body).expect("パース失敗");
        assert_eq!(result.image_path, "/img/1.png");
        assert_eq!(result.analysis, "A cat");
    }

    #[test]
    fn test_parse_analyze_error_field() {
        let err = parse_analyze(true, r#"{"error": "Invalid file type"}"#).unwrap_err();
        assert_eq!(err.user_message(), "Invalid file type");
    }

    #[test]
    fn test_parse_analyze_missing_analysis() {
        let err = parse_analyze(true, r#"{"imagePath": "/img/1.png"}"#).unwrap_err();
        assert_eq!(err.user_message(), MSG_ANALYZE_FAILED);
    }

    // =============================================
    // /process-image
    // =============================================

    #[test]
    fn test_parse_process_success() {
        let body = r#"{
            "processedImage": "/static/processed/processed_ab.jpg",
            "message": "Image processed with blur effect"
        }"#;
        let result = parse_process(true, body).expect("パース失敗");
        assert_eq!(result, "/static/processed/processed_ab.jpg");
    }

    #[test]
    fn test_parse_process_http_error() {
        let err = parse_process(false, r#"{"error": "Invalid image path"}"#).unwrap_err();
        assert_eq!(err.user_message(), "Invalid image path");
    }

    #[test]
    fn test_parse_process_missing_field() {
        let err = parse_process(true, r#"{"message": "ok"}"#).unwrap_err();
        assert_eq!(err.user_message(), MSG_PROCESS_FAILED);
    }
}
