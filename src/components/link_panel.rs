//! Link Panel Component
//!
//! Collapsible settings panel for one link record.

use leptos::prelude::*;

use crate::components::{ParentSelector, RemoveLinkButton, TargetSelector};
use crate::context::use_editor;
use crate::models::LinkField;
use crate::store::EditorStateStoreFields;

#[component]
pub fn LinkPanel(index: usize) -> impl IntoView {
    let ctx = use_editor();
    let store = ctx.store;
    let link = Memo::new(move |_| {
        store.links().with(|links| links.get(index).cloned().unwrap_or_default())
    });
    let (open, set_open) = signal(false);

    let title = move || format!("Nav Item {}: {}", index + 1, link.get().text);
    let is_group = move || link.get().group;

    let on_group_toggle = move |ev: leptos::ev::Event| {
        let group = event_target_checked(&ev);
        // A heading cannot sit inside another submenu
        if group && link.get_untracked().is_child {
            ctx.set_parent(index, None);
        }
        ctx.update_link(index, LinkField::Group(group));
    };

    view! {
        <div class=move || if open.get() { "components-panel__body is-opened" } else { "components-panel__body" }>
            <h2 class="components-panel__body-title">
                <button on:click=move |_| set_open.update(|o| *o = !*o)>{title}</button>
            </h2>
            <Show when=move || open.get()>
                <div class="nav-item-settings">
                    <label>
                        "Link Text"
                        <input
                            type="text"
                            prop:value=move || link.get().text
                            on:input=move |ev| ctx.update_link(index, LinkField::Text(event_target_value(&ev)))
                        />
                    </label>
                    <Show when=move || !is_group()>
                        <label>
                            "Link Url"
                            <input
                                type="text"
                                prop:value=move || link.get().url
                                on:input=move |ev| ctx.update_link(index, LinkField::Url(event_target_value(&ev)))
                            />
                        </label>
                        <TargetSelector
                            index=index
                            current=Signal::derive(move || link.get().target)
                            on_change=move |target| ctx.update_link(index, LinkField::Target(target))
                        />
                        <ParentSelector index=index link=link />
                    </Show>
                    <label class="components-toggle-control">
                        <input type="checkbox" prop:checked=is_group on:change=on_group_toggle />
                        "Nav Item has submenu"
                    </label>
                    <RemoveLinkButton
                        link_text=Signal::derive(move || link.get().text)
                        on_remove=Callback::new(move |_| ctx.remove_link(index))
                    />
                </div>
            </Show>
        </div>
    }
}
