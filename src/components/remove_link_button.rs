//! Remove Link Button
//!
//! Foot of each link panel. Removing is a two-step action.

use leptos::prelude::*;

/// "Remove Link", then a prompt naming the link with Remove and Cancel.
///
/// `on_remove` runs only from the prompt.
#[component]
pub fn RemoveLinkButton(
    #[prop(into)] link_text: Signal<String>,
    #[prop(into)] on_remove: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);

    let prompt = move || {
        let text = link_text.get();
        if text.trim().is_empty() {
            "Remove this link?".to_string()
        } else {
            format!("Remove \"{}\"?", text)
        }
    };

    move || {
        if asking.get() {
            view! {
                <div class="remove-link-confirm">
                    <span class="remove-link-prompt">{prompt}</span>
                    <button
                        class="components-button is-destructive"
                        on:click=move |_| {
                            set_asking.set(false);
                            on_remove.run(());
                        }
                    >
                        "Remove"
                    </button>
                    <button class="components-button is-tertiary" on:click=move |_| set_asking.set(false)>
                        "Cancel"
                    </button>
                </div>
            }
            .into_any()
        } else {
            view! {
                <button class="components-button is-secondary" on:click=move |_| set_asking.set(true)>
                    "Remove Link"
                </button>
            }
            .into_any()
        }
    }
}
