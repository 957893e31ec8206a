//! Link Settings Component
//!
//! The Links tab: add button plus one panel per record.

use leptos::prelude::*;

use crate::components::LinkPanel;
use crate::context::use_editor;
use crate::store::EditorStateStoreFields;

#[component]
pub fn LinkSettings() -> impl IntoView {
    let ctx = use_editor();
    let store = ctx.store;

    // Keyed by position and id so panels follow their record
    let rows = move || {
        store.links().with(|links| {
            links.iter().enumerate().map(|(i, l)| (i, l.id)).collect::<Vec<_>>()
        })
    };

    view! {
        <div class="components-panel__body is-opened">
            <h2 class="components-panel__body-title">"Add Links"</h2>
            <button class="components-button is-primary" on:click=move |_| ctx.add_link()>
                "Add Link"
            </button>
        </div>
        <For
            each=rows
            key=|row| *row
            children=move |(index, _)| view! { <LinkPanel index=index /> }
        />
    }
}
