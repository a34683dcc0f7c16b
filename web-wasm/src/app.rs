//! メインアプリケーションコンポーネント

use leptos::prelude::*;

use crate::components::{
    generate_form::GenerateForm, header::Header, image_section::ImageSection, tab_bar::TabBar,
};

/// 表示タブ
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    TextGenerator,
    ImageAnalyzer,
}

impl Tab {
    /// タブボタンの表示順
    pub const ALL: [Tab; 2] = [Tab::TextGenerator, Tab::ImageAnalyzer];

    /// タブボタンのdata-tab値 = 対応パネルのid
    pub fn panel_id(&self) -> &'static str {
        match self {
            Tab::TextGenerator => "text-generator",
            Tab::ImageAnalyzer => "image-analyzer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::TextGenerator => "Text Generation",
            Tab::ImageAnalyzer => "Image Analysis",
        }
    }
}

/// メインアプリケーションコンポーネント
///
/// フローをまたぐ状態はここが持つ:
/// - アクティブタブ
/// - 解析フローが返した画像パス（加工フローのhiddenフィールドになる）
/// - 加工済み画像URL（再解析時にリセットされる）
#[component]
pub fn App() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(Tab::default());
    let (original_image_path, set_original_image_path) = signal(String::new());
    let (processed_image, set_processed_image) = signal(String::new());

    view! {
        <div class="container">
            <Header />

            <TabBar active_tab=active_tab set_active_tab=set_active_tab />

            <div
                id=Tab::TextGenerator.panel_id()
                class="tab-content"
                class:active=move || active_tab.get() == Tab::TextGenerator
            >
                <GenerateForm />
            </div>

            <div
                id=Tab::ImageAnalyzer.panel_id()
                class="tab-content"
                class:active=move || active_tab.get() == Tab::ImageAnalyzer
            >
                <ImageSection
                    original_image_path=original_image_path
                    set_original_image_path=set_original_image_path
                    processed_image=processed_image
                    set_processed_image=set_processed_image
                />
            </div>
        </div>
    }
}
