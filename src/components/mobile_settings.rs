//! Mobile Settings Component
//!
//! The Mobile tab: colour of the hamburger icon.

use leptos::prelude::*;

use crate::context::use_editor;
use crate::store::EditorStateStoreFields;

#[component]
pub fn MobileSettings() -> impl IntoView {
    let ctx = use_editor();
    let store = ctx.store;
    let current = move || store.menu_color().get().unwrap_or_default();

    view! {
        <div class="components-panel__body is-opened">
            <h2 class="components-panel__body-title">"Mobile Settings"</h2>
            <p>
                "This is for the hamburger menu icon which will be shown on mobile. "
                "To preview the menu resize the editor window to less than 600px wide."
            </p>
            <div class="components-color-palette" aria-label="Menu Colour">
                <For
                    each=move || store.palette().get()
                    key=|c| c.color.clone()
                    children=move |c| {
                        let value = c.color.clone();
                        let is_selected = {
                            let value = value.clone();
                            move || store.menu_color().get().as_deref() == Some(value.as_str())
                        };
                        view! {
                            <button
                                class=move || if is_selected() { "color-option is-selected" } else { "color-option" }
                                title=c.name.clone()
                                style=format!("background: {}", c.color)
                                on:click=move |_| ctx.set_menu_color(Some(value.clone()))
                            ></button>
                        }
                    }
                />
            </div>
            <label>
                "Custom colour"
                <input
                    type="text"
                    prop:value=current
                    on:change=move |ev| ctx.set_menu_color(Some(event_target_value(&ev)))
                />
            </label>
            <button class="components-button is-secondary" on:click=move |_| ctx.set_menu_color(None)>
                "Clear"
            </button>
        </div>
    }
}
