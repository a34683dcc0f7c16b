//! タブ切り替えコンポーネント
//!
//! クリックされたタブだけがactiveになる。同じタブを二度クリックしても
//! activeなボタンとパネルは常に1つずつ。

use leptos::prelude::*;

use crate::app::Tab;

#[component]
pub fn TabBar(active_tab: ReadSignal<Tab>, set_active_tab: WriteSignal<Tab>) -> impl IntoView {
    view! {
        <nav class="tabs">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class="tab-button"
                            class:active=move || active_tab.get() == tab
                            data-tab=tab.panel_id()
                            on:click=move |_| set_active_tab.set(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
