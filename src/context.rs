//! Editor Context
//!
//! The link list store and editor configuration, shared via the Leptos
//! Context API. Every mutation goes through the `LinkListStore`, whose change
//! callback mirrors the new list into the reactive store and persists it to
//! the host.

use leptos::prelude::*;
use nav_core::LinkListStore;

use crate::commands;
use crate::models::{LinkField, LinkRecord, NavConfig};
use crate::store::{EditorStateStoreFields, EditorStore};

type ChangeFn = Box<dyn FnMut(&[LinkRecord]) + Send + Sync>;

#[derive(Clone, Copy)]
pub struct EditorContext {
    /// Reactive mirror of the block attributes
    pub store: EditorStore,
    /// Block configuration, read once at mount
    pub config: StoredValue<NavConfig>,
    links: StoredValue<LinkListStore<ChangeFn>>,
}

fn log_error(action: &str, e: impl std::fmt::Display) {
    web_sys::console::error_1(&format!("[EDITOR] {} failed: {}", action, e).into());
}

impl EditorContext {
    pub fn new(store: EditorStore, config: NavConfig, initial: Vec<LinkRecord>) -> Self {
        let on_change: ChangeFn = Box::new(move |links: &[LinkRecord]| {
            store.links().set(links.to_vec());
            if let Err(e) = commands::save_links(links) {
                log_error("save links", e);
            }
        });
        let default_target = config.default_target;
        Self {
            store,
            config: StoredValue::new(config),
            links: StoredValue::new(LinkListStore::new(initial, default_target, on_change)),
        }
    }

    pub fn add_link(&self) {
        self.links.update_value(|links| {
            let id = links.add();
            web_sys::console::log_1(&format!("[EDITOR] Added link {}", id).into());
        });
    }

    pub fn remove_link(&self, index: usize) {
        self.links.update_value(|links| {
            if let Err(e) = links.remove(index) {
                log_error("remove link", e);
            }
        });
    }

    pub fn update_link(&self, index: usize, field: LinkField) {
        self.links.update_value(|links| {
            if let Err(e) = links.update_field(index, field) {
                log_error("update link", e);
            }
        });
    }

    /// Move a top-level link; positions are within the top-level view
    pub fn move_top_level(&self, from: usize, to: usize) {
        self.links.update_value(|links| {
            if let Err(e) = links.reorder_top_level(from, to) {
                log_error("reorder links", e);
            }
        });
    }

    pub fn set_parent(&self, index: usize, parent: Option<u32>) {
        self.links.update_value(|links| {
            if let Err(e) = links.reparent(index, parent) {
                log_error("set submenu parent", e);
            }
        });
    }

    pub fn set_menu_color(&self, color: Option<String>) {
        let color = color.filter(|c| !c.trim().is_empty());
        if let Err(e) = commands::save_menu_color(color.as_deref()) {
            log_error("save menu colour", e);
        }
        self.store.menu_color().set(color);
    }
}

/// Get the editor context
pub fn use_editor() -> EditorContext {
    use_context::<EditorContext>().expect("EditorContext should be provided")
}
