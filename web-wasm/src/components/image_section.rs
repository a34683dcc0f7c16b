//! 画像解析・画像加工セクション
//!
//! 解析フローと加工フローは1つのエラーパネルを共有する。
//! 解析成功時にサーバーが返した画像パスがhiddenフィールドへ渡り、
//! 加工フローが使えるようになる。

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader};

use ai_analyzer_common::{
    strength_percent, validate_image_selected, validate_original_path, EffectKind, FlowState,
    STRENGTH_DEFAULT, STRENGTH_MAX, STRENGTH_MIN,
};

use crate::api;

const ANALYZE_LABEL: &str = "Analyze Image";
const PROCESS_LABEL: &str = "Apply Effect";

#[component]
pub fn ImageSection(
    original_image_path: ReadSignal<String>,
    set_original_image_path: WriteSignal<String>,
    processed_image: ReadSignal<String>,
    set_processed_image: WriteSignal<String>,
) -> impl IntoView {
    let (analyze_flow, set_analyze_flow) = signal(FlowState::new());
    let (process_flow, set_process_flow) = signal(FlowState::new());

    let (preview_src, set_preview_src) = signal(None::<String>);
    let (analysis_image, set_analysis_image) = signal(String::new());
    let (analysis_text, set_analysis_text) = signal(String::new());
    let (effect, set_effect) = signal(EffectKind::default());
    let (strength, set_strength) = signal(STRENGTH_DEFAULT);

    let file_input_ref = NodeRef::<html::Input>::new();

    let selected_file =
        move || file_input_ref.get().and_then(|input| input.files()).and_then(|files| files.get(0));

    // ファイル選択時のローカルプレビュー（送信とは独立）
    let on_file_change = move |_| match selected_file() {
        Some(file) => read_preview(file, move |data_url| set_preview_src.set(Some(data_url))),
        None => set_preview_src.set(None),
    };

    let on_analyze_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // 共有エラーパネルを畳む
        set_process_flow.update(|f| f.dismiss_error());

        let file = selected_file();
        if let Err(err) = validate_image_selected(file.is_some()) {
            set_analyze_flow.update(|f| f.show_error(err.user_message()));
            return;
        }
        let Some(file) = file else {
            return;
        };

        set_analyze_flow.update(|f| f.begin());

        spawn_local(async move {
            match api::analyze_image(&file).await {
                Ok(result) => {
                    set_analysis_image.set(result.image_path.clone());
                    set_analysis_text.set(result.analysis);
                    // 加工フローへ画像パスを渡し、前回の加工結果はリセットする
                    set_original_image_path.set(result.image_path);
                    set_processed_image.set(String::new());
                    set_analyze_flow.update(|f| f.settle_ok());
                }
                Err(err) => {
                    gloo::console::error!(format!("analyze failed: {}", err));
                    set_analyze_flow.update(|f| f.settle_err(err.user_message()));
                }
            }
        });
    };

    let on_process_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_analyze_flow.update(|f| f.dismiss_error());

        let path = original_image_path.get();
        if let Err(err) = validate_original_path(&path) {
            set_process_flow.update(|f| f.show_error(err.user_message()));
            return;
        }

        set_process_flow.update(|f| f.begin());
        let effect = effect.get();
        let strength = strength.get();

        spawn_local(async move {
            match api::process_image(&path, effect, strength).await {
                Ok(url) => {
                    set_processed_image.set(url);
                    set_process_flow.update(|f| f.settle_ok());
                }
                Err(err) => {
                    gloo::console::error!(format!("process failed: {}", err));
                    set_processed_image.set(String::new());
                    set_process_flow.update(|f| f.settle_err(err.user_message()));
                }
            }
        });
    };

    // 共有エラーパネルの文言。両フローのbeginが相手側も畳むので高々片方だけ残る
    let image_error = move || {
        process_flow
            .with(|f| f.error().map(str::to_string))
            .or_else(|| analyze_flow.with(|f| f.error().map(str::to_string)))
    };

    view! {
        <form id="imageAnalyzeForm" on:submit=on_analyze_submit>
            <div class="form-group">
                <label for="image">"Upload an image"</label>
                <input
                    type="file"
                    id="image"
                    name="image"
                    accept="image/*"
                    node_ref=file_input_ref
                    on:change=on_file_change
                />
            </div>

            <div class="image-preview-container" class:hidden=move || preview_src.get().is_none()>
                <img
                    id="imagePreview"
                    alt="Preview"
                    src=move || preview_src.get().unwrap_or_default()
                />
            </div>

            <button
                type="submit"
                class="submit-btn"
                disabled=move || analyze_flow.with(|f| f.is_submitting())
            >
                <span class="btn-text">
                    {move || analyze_flow.with(|f| f.button_label(ANALYZE_LABEL))}
                </span>
                <span
                    class="spinner"
                    class:hidden=move || !analyze_flow.with(|f| f.is_submitting())
                ></span>
            </button>
        </form>

        <div
            id="analysis-container"
            class:hidden=move || !analyze_flow.with(|f| f.response_visible())
        >
            <h3>"Analysis"</h3>
            <img id="analyzedImage" alt="Analyzed image" src=move || analysis_image.get() />
            <p id="image-analysis">{move || analysis_text.get()}</p>
        </div>

        <div
            id="image-process-section"
            class:hidden=move || original_image_path.with(|p| p.is_empty())
        >
            <h3>"Apply Effect"</h3>
            <form id="imageProcessForm" on:submit=on_process_submit>
                <input
                    type="hidden"
                    id="originalImagePath"
                    name="originalImage"
                    prop:value=move || original_image_path.get()
                />

                <div class="form-group">
                    <label for="operation">"Effect"</label>
                    <select
                        id="operation"
                        name="operation"
                        on:change=move |ev| set_effect.set(EffectKind::parse(&event_target_value(&ev)))
                    >
                        {EffectKind::ALL
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <option
                                        value=kind.as_str()
                                        selected=move || effect.get() == kind
                                    >
                                        {kind.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="strength">"Effect strength"</label>
                    <input
                        type="range"
                        id="strength"
                        name="strength"
                        min=STRENGTH_MIN.to_string()
                        max=STRENGTH_MAX.to_string()
                        step="0.05"
                        prop:value=move || strength.get().to_string()
                        on:input=move |ev| {
                            set_strength
                                .set(event_target_value(&ev).parse().unwrap_or(STRENGTH_DEFAULT));
                        }
                    />
                    <span id="strengthValue">{move || strength_percent(strength.get())}</span>
                </div>

                <button
                    type="submit"
                    class="submit-btn"
                    disabled=move || process_flow.with(|f| f.is_submitting())
                >
                    <span class="btn-text">
                        {move || process_flow.with(|f| f.button_label(PROCESS_LABEL))}
                    </span>
                    <span
                        class="spinner"
                        class:hidden=move || !process_flow.with(|f| f.is_submitting())
                    ></span>
                </button>
            </form>

            <div
                id="processed-image-container"
                class:hidden=move || processed_image.with(|p| p.is_empty())
            >
                <h3>"Processed Image"</h3>
                <img id="processedImage" alt="Processed image" src=move || processed_image.get() />
                <a
                    id="downloadLink"
                    class="download-link"
                    href=move || processed_image.get()
                    download="processed-image.jpg"
                >
                    "Download Image"
                </a>
            </div>
        </div>

        <div id="image-error-container" class:hidden=move || image_error().is_none()>
            <p class="error-message">{move || image_error().unwrap_or_default()}</p>
        </div>
    }
}

/// 選択された画像をData URLとして読み込み、プレビューに渡す
fn read_preview<F>(file: File, on_loaded: F)
where
    F: Fn(String) + 'static,
{
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(err) => {
            gloo::console::error!(format!("FileReader unavailable: {:?}", err));
            return;
        }
    };

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                on_loaded(data_url);
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
