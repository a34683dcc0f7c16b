//! テキスト生成フォームコンポーネント
//!
//! 検証 -> 送信 -> 結果またはエラー表示。送信中はボタンを無効化し、
//! 決着後は必ず元のラベルに戻る。

use leptos::prelude::*;
use leptos::task::spawn_local;

use ai_analyzer_common::{validate_prompt, FlowState};

use crate::api;

const IDLE_LABEL: &str = "Generate";

#[component]
pub fn GenerateForm() -> impl IntoView {
    let (flow, set_flow) = signal(FlowState::new());
    let (prompt, set_prompt) = signal(String::new());
    let (response_text, set_response_text) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let trimmed = match validate_prompt(&prompt.get()) {
            Ok(trimmed) => trimmed,
            Err(err) => {
                set_flow.update(|f| f.show_error(err.user_message()));
                return;
            }
        };

        set_flow.update(|f| f.begin());

        spawn_local(async move {
            match api::generate_text(&trimmed).await {
                Ok(text) => {
                    set_response_text.set(text);
                    // 成功時はフォームをリセットする
                    set_prompt.set(String::new());
                    set_flow.update(|f| f.settle_ok());
                }
                Err(err) => {
                    gloo::console::error!(format!("generate failed: {}", err));
                    set_flow.update(|f| f.settle_err(err.user_message()));
                }
            }
        });
    };

    view! {
        <form id="generateForm" on:submit=on_submit>
            <div class="form-group">
                <label for="user_input">"Enter your prompt"</label>
                <textarea
                    id="user_input"
                    name="user_input"
                    placeholder="Ask me anything..."
                    prop:value=move || prompt.get()
                    on:input=move |ev| set_prompt.set(event_target_value(&ev))
                ></textarea>
            </div>

            <button
                type="submit"
                class="submit-btn"
                disabled=move || flow.with(|f| f.is_submitting())
            >
                <span class="btn-text">{move || flow.with(|f| f.button_label(IDLE_LABEL))}</span>
                <span class="spinner" class:hidden=move || !flow.with(|f| f.is_submitting())></span>
            </button>
        </form>

        <div
            id="response-container"
            class:hidden=move || !flow.with(|f| f.response_visible())
        >
            <h3>"Response"</h3>
            <p id="ai-response">{move || response_text.get()}</p>
        </div>

        <div id="error-container" class:hidden=move || flow.with(|f| f.error().is_none())>
            <p class="error-message">
                {move || flow.with(|f| f.error().unwrap_or_default().to_string())}
            </p>
        </div>
    }
}
