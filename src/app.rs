//! Custom Nav Editor App
//!
//! Inspector tabs on the side, live preview in the canvas.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{bind_global_handlers, create_dnd_signals};
use nav_core::icon;
use reactive_stores::Store;

use crate::commands;
use crate::components::{LinkSettings, MobileSettings, NavOrder, NavPreview, TabBar};
use crate::context::EditorContext;
use crate::models::{EditorTab, NavConfig};
use crate::store::{EditorState, EditorStateStoreFields};

fn log_error(action: &str, e: &str) {
    web_sys::console::error_1(&format!("[APP] {} failed: {}", action, e).into());
}

#[component]
pub fn App() -> impl IntoView {
    // Host-provided state
    let config = commands::load_config().unwrap_or_else(|e| {
        log_error("load config", &e);
        NavConfig::default()
    });
    // Without the saved links, any edit would overwrite them on the host
    let attrs = match commands::load_attributes() {
        Ok(attrs) => attrs,
        Err(e) => {
            log_error("load attributes", &e);
            return view! { <LoadError message=e /> }.into_any();
        }
    };
    let palette = commands::load_palette().unwrap_or_else(|e| {
        log_error("load palette", &e);
        Vec::new()
    });
    let icon_url = config.icon_url.clone();

    let store = Store::new(EditorState {
        links: attrs.links.clone(),
        menu_color: attrs.menu_color.clone(),
        icon_svg: String::new(),
        palette,
    });
    let ctx = EditorContext::new(store, config, attrs.links);
    provide_context(store);
    provide_context(ctx);

    let (current_tab, set_current_tab) = signal(EditorTab::default());

    // Order tab DnD, bound once for the editor's lifetime
    let dnd = create_dnd_signals();
    bind_global_handlers(dnd, move |from, to| {
        web_sys::console::log_1(&format!("[DND] Move top-level link {} -> {}", from, to).into());
        ctx.move_top_level(from, to);
    });

    // Reload the icon whenever the colour changes
    Effect::new(move |_| {
        let color = store.menu_color().get();
        let url = icon_url.clone();
        spawn_local(async move {
            match commands::fetch_icon(&url).await {
                Ok(svg) => match icon::recolor(&svg, color.as_deref()) {
                    Ok(styled) => store.icon_svg().set(styled),
                    Err(e) => log_error("recolour icon", &e.to_string()),
                },
                Err(e) => log_error("load icon", &e),
            }
        });
    });

    view! {
        <div class="wcrh-custom-nav-editor">
            <aside class="block-editor-block-inspector">
                <TabBar current_tab=current_tab set_current_tab=set_current_tab />
                {move || match current_tab.get() {
                    EditorTab::Links => view! { <LinkSettings /> }.into_any(),
                    EditorTab::Order => view! { <NavOrder dnd=dnd /> }.into_any(),
                    EditorTab::Mobile => view! { <MobileSettings /> }.into_any(),
                }}
            </aside>
            <NavPreview />
        </div>
    }
    .into_any()
}

/// Shown instead of the editor when the saved attributes cannot be read
#[component]
fn LoadError(message: String) -> impl IntoView {
    view! {
        <div class="wcrh-custom-nav-editor">
            <div class="components-notice is-error">
                <p>"Custom Nav could not read its saved links. Editing is disabled so they are not overwritten."</p>
                <pre>{message}</pre>
            </div>
        </div>
    }
}
