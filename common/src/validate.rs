//! 送信前のローカル検証
//!
//! 検証に失敗した場合はネットワーク送信を行わず、
//! フローのエラーパネルにメッセージを表示する

use crate::error::{Error, Result};

/// テキスト生成フローの検証メッセージ
pub const MSG_EMPTY_PROMPT: &str = "Please enter some text";
/// 画像解析フローの検証メッセージ
pub const MSG_NO_IMAGE: &str = "Please select an image to analyze";
/// 画像加工フローの検証メッセージ
pub const MSG_NO_ORIGINAL: &str = "No image selected for processing";

/// 生成プロンプトを検証し、トリム済み文字列を返す
///
/// # Returns
/// * `Ok(String)` - 前後空白を除いた入力
/// * `Err(Validation)` - 空または空白のみ
pub fn validate_prompt(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation(MSG_EMPTY_PROMPT.to_string()));
    }
    Ok(trimmed.to_string())
}

/// 画像ファイルが選択されているか検証する
pub fn validate_image_selected(has_file: bool) -> Result<()> {
    if !has_file {
        return Err(Error::Validation(MSG_NO_IMAGE.to_string()));
    }
    Ok(())
}

/// 解析済み画像パス（hiddenフィールド）が存在するか検証する
pub fn validate_original_path(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(Error::Validation(MSG_NO_ORIGINAL.to_string()));
    }
    Ok(())
}
