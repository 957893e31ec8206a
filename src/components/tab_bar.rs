//! Inspector Tab Bar Component
//!
//! Tab bar for switching between the Links, Order and Mobile panels.

use leptos::prelude::*;

use crate::models::EditorTab;

#[component]
pub fn TabBar(
    current_tab: ReadSignal<EditorTab>,
    set_current_tab: WriteSignal<EditorTab>,
) -> impl IntoView {
    view! {
        <div class="components-tab-panel__tabs">
            {EditorTab::ALL.iter().map(|&tab| {
                let tab_class = move || {
                    if current_tab.get() == tab {
                        format!("components-tab-panel__tab {} active-tab", tab.class_name())
                    } else {
                        format!("components-tab-panel__tab {}", tab.class_name())
                    }
                };
                view! {
                    <button class=tab_class on:click=move |_| set_current_tab.set(tab)>
                        {tab.title()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
