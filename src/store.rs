//! Editor State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use reactive_stores::Store;
use crate::models::{LinkRecord, PaletteColor};

/// Editor state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct EditorState {
    /// Link records in menu order
    pub links: Vec<LinkRecord>,
    /// Mobile icon colour (CSS colour or palette token)
    pub menu_color: Option<String>,
    /// Recoloured icon markup; empty until the asset loads
    pub icon_svg: String,
    /// Theme palette from the host
    pub palette: Vec<PaletteColor>,
}

/// Type alias for the store
pub type EditorStore = Store<EditorState>;
