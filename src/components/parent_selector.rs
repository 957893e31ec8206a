//! Parent Selector Component
//!
//! Chooses which submenu heading a link is nested under.

use leptos::prelude::*;
use nav_core::classify;

use crate::context::use_editor;
use crate::models::LinkRecord;
use crate::store::EditorStateStoreFields;

#[component]
pub fn ParentSelector(index: usize, link: Memo<LinkRecord>) -> impl IntoView {
    let ctx = use_editor();
    let store = ctx.store;

    // Every heading except the link itself
    let options = Memo::new(move |_| {
        let own_id = link.get().id;
        store.links().with(|links| {
            classify::parents(links)
                .into_iter()
                .filter(|p| p.id != own_id)
                .map(|p| (p.id, p.text.clone()))
                .collect::<Vec<_>>()
        })
    });
    let selected = move || link.get().parent_menu.map(|id| id.to_string()).unwrap_or_default();
    let orphaned = move || {
        let own_id = link.get().id;
        store.links().with(|links| classify::orphans(links).iter().any(|l| l.id == own_id))
    };

    view! {
        <label class="parent-menu">
            "Parent Menu"
            <select
                prop:value=selected
                on:change=move |ev| {
                    let parent = event_target_value(&ev).parse::<u32>().ok();
                    ctx.set_parent(index, parent);
                }
            >
                <option value="">"None (top level)"</option>
                <For
                    each=move || options.get()
                    key=|(id, text)| (*id, text.clone())
                    children=move |(id, text)| {
                        view! { <option value=id.to_string()>{text}</option> }
                    }
                />
            </select>
        </label>
        <Show when=orphaned>
            <p class="parent-menu-warning">"This link's submenu no longer exists; it will not be shown."</p>
        </Show>
    }
}
