//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"AI Image Analyzer"</h1>
            <p class="subtitle">"Generate text, analyze images, and apply effects"</p>
        </header>
    }
}
