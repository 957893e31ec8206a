//! Nav Preview Component
//!
//! Canvas rendering of the block inside the editor.

use leptos::prelude::*;
use nav_core::render;

use crate::context::use_editor;
use crate::models::BlockAttributes;
use crate::store::EditorStateStoreFields;

#[component]
pub fn NavPreview() -> impl IntoView {
    let ctx = use_editor();
    let store = ctx.store;
    let (placeholder, close_label, block_class) = ctx.config.with_value(|c| {
        (c.placeholder_text.clone(), c.close_label.clone(), c.block_class.clone())
    });

    let fill_class = move || {
        let attrs = BlockAttributes {
            links: Vec::new(),
            menu_color: store.menu_color().get(),
        };
        attrs.fill_class()
    };
    let labels = move || {
        store.links().with(|links| render::preview_labels(links, &placeholder, &close_label))
    };

    view! {
        <div class=block_class>
            <button id="open-mobile-menu" class=fill_class inner_html=move || store.icon_svg().get()></button>
            <ul>
                {move || labels().into_iter().map(|label| view! { <li>{label}</li> }).collect_view()}
            </ul>
        </div>
    }
}
