//! Frontend Models
//!
//! Link data comes from nav-core; editor-only shapes live here.

use serde::{Deserialize, Serialize};

pub use nav_core::{BlockAttributes, LinkField, LinkRecord, LinkTarget, NavConfig};

/// Theme palette entry provided by the host editor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteColor {
    pub name: String,
    pub color: String,
}

/// Inspector tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTab {
    #[default]
    Links,
    Order,
    Mobile,
}

impl EditorTab {
    pub const ALL: [EditorTab; 3] = [EditorTab::Links, EditorTab::Order, EditorTab::Mobile];

    pub fn title(&self) -> &'static str {
        match self {
            EditorTab::Links => "Links",
            EditorTab::Order => "Order",
            EditorTab::Mobile => "Mobile",
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            EditorTab::Links => "links-settings-tab",
            EditorTab::Order => "nav-order-tab",
            EditorTab::Mobile => "mobile-settings-tab",
        }
    }
}
