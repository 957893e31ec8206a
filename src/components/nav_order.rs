//! Nav Order Component
//!
//! The Order tab: drag top-level links to change menu order.

use leptos::prelude::*;
use nav_core::classify;

use crate::context::use_editor;
use crate::store::EditorStateStoreFields;

use leptos_dragdrop::*;

/// `dnd` is created and bound once by the app so listeners outlive tab switches
#[component]
pub fn NavOrder(dnd: DndSignals) -> impl IntoView {
    let ctx = use_editor();
    let store = ctx.store;
    let placeholder = ctx.config.with_value(|c| c.placeholder_text.clone());

    let rows = move || {
        store.links().with(|links| {
            classify::top_level(links)
                .into_iter()
                .enumerate()
                .map(|(pos, l)| (pos, l.id, l.text.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="components-panel__body is-opened">
            <h2 class="components-panel__body-title">"Nav Order"</h2>
            <p>"Drag and drop the links below to change the order."</p>
            <Show
                when=move || !store.links().with(|l| l.is_empty())
                fallback=move || view! { <ul><li>{placeholder.clone()}</li></ul> }
            >
                <ul class="nav-order-list">
                    <For
                        each=rows
                        key=|row| row.clone()
                        children=move |(pos, _, text)| {
                            let row_class = move || {
                                if dnd.is_dragging(pos) {
                                    "nav-order-item dragging"
                                } else if dnd.is_hover(pos) {
                                    "nav-order-item drop-target"
                                } else {
                                    "nav-order-item"
                                }
                            };
                            view! {
                                <li
                                    class=row_class
                                    style="cursor: move"
                                    on:mousedown=make_on_mousedown(dnd, pos)
                                    on:mouseenter=make_on_mouseenter(dnd, pos)
                                    on:mouseleave=make_on_mouseleave(dnd)
                                >
                                    {text}
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
