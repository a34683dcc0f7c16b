//! バックエンドAPI連携
//!
//! 3エンドポイントへのfetch送信。フォームエンコードは`UrlSearchParams`、
//! 画像アップロードは`FormData`(multipart)で送る。
//! レスポンスの決着判定は`ai_analyzer_common::parser`に委譲する。

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, Response, UrlSearchParams};

use ai_analyzer_common::{
    parse_analyze, parse_generate, parse_process, Analysis, EffectKind, Error, Result,
};

const GENERATE_URL: &str = "/generate";
const ANALYZE_URL: &str = "/analyze-image";
const PROCESS_URL: &str = "/process-image";

/// fetch層の失敗を共通エラー型に変換
fn transport(err: JsValue) -> Error {
    Error::Transport(format!("{:?}", err))
}

/// フォームフィールドをURLSearchParamsに詰める
fn form_body(fields: &[(&str, &str)]) -> std::result::Result<UrlSearchParams, JsValue> {
    let params = UrlSearchParams::new()?;
    for (name, value) in fields {
        params.append(name, value);
    }
    Ok(params)
}

/// リクエストを送信し、(2xxか, ボディ文字列)を返す
async fn send(request: Request) -> std::result::Result<(bool, String), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let ok = resp.ok();
    let text = JsFuture::from(resp.text()?).await?;
    Ok((ok, text.as_string().unwrap_or_default()))
}

/// application/x-www-form-urlencoded でPOSTする
async fn post_form(
    url: &str,
    fields: &[(&str, &str)],
) -> std::result::Result<(bool, String), JsValue> {
    let params = form_body(fields)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(params.as_ref());

    let request = Request::new_with_str_and_init(url, &opts)?;
    request
        .headers()
        .set("Content-Type", "application/x-www-form-urlencoded")?;

    send(request).await
}

/// multipart/form-data で画像ファイルをPOSTする
///
/// Content-Typeはboundary付きでブラウザが設定するため、手では付けない
async fn post_image(url: &str, file: &File) -> std::result::Result<(bool, String), JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename("image", file, &file.name())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(form.as_ref());

    let request = Request::new_with_str_and_init(url, &opts)?;
    send(request).await
}

/// テキスト生成を実行する
pub async fn generate_text(prompt: &str) -> Result<String> {
    let (ok, body) = post_form(GENERATE_URL, &[("user_input", prompt)])
        .await
        .map_err(transport)?;
    parse_generate(ok, &body)
}

/// 画像解析を実行する
pub async fn analyze_image(file: &File) -> Result<Analysis> {
    let (ok, body) = post_image(ANALYZE_URL, file).await.map_err(transport)?;
    parse_analyze(ok, &body)
}

/// 画像加工を実行し、加工済み画像URLを返す
pub async fn process_image(
    original_path: &str,
    effect: EffectKind,
    strength: f64,
) -> Result<String> {
    let (ok, body) = post_form(
        PROCESS_URL,
        &[
            ("originalImage", original_path),
            ("operation", effect.as_str()),
            ("strength", &strength.to_string()),
        ],
    )
    .await
    .map_err(transport)?;
    parse_process(ok, &body)
}
