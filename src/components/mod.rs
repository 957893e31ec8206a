//! UI Components
//!
//! Inspector panels and the canvas preview.

mod tab_bar;
mod link_settings;
mod link_panel;
mod target_selector;
mod parent_selector;
mod remove_link_button;
mod nav_order;
mod mobile_settings;
mod nav_preview;

pub use tab_bar::TabBar;
pub use link_settings::LinkSettings;
pub use link_panel::LinkPanel;
pub use target_selector::TargetSelector;
pub use parent_selector::ParentSelector;
pub use remove_link_button::RemoveLinkButton;
pub use nav_order::NavOrder;
pub use mobile_settings::MobileSettings;
pub use nav_preview::NavPreview;
