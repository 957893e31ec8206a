//! Target Selector Component
//!
//! Radio group choosing where a link opens.

use leptos::prelude::*;

use crate::models::LinkTarget;

/// Target options in display order
pub const LINK_TARGETS: [LinkTarget; 2] = [LinkTarget::NewTab, LinkTarget::SelfTab];

/// Radio buttons for a link's target
#[component]
pub fn TargetSelector(
    /// Used to group the radios of one link
    index: usize,
    current: Signal<LinkTarget>,
    on_change: impl Fn(LinkTarget) + Copy + 'static,
) -> impl IntoView {
    let name = format!("link-target-{}", index);
    view! {
        <fieldset class="link-target">
            <legend>"Link Target"</legend>
            {LINK_TARGETS.iter().map(|&target| {
                view! {
                    <label class="radio-option">
                        <input
                            type="radio"
                            name=name.clone()
                            value=target.as_str()
                            prop:checked=move || current.get() == target
                            on:change=move |_| on_change(target)
                        />
                        {target.label()}
                    </label>
                }
            }).collect_view()}
        </fieldset>
    }
}
