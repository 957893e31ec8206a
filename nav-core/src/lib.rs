//! Custom Nav Core
//!
//! Layered like the editor uses it:
//! - domain: link records, block attributes, errors
//! - ops / store: list mutations and the store that reports them to the host
//! - classify / render: read-only views and menu projections
//! - icon / mobile: hamburger icon recolouring and the mobile toggle steps

pub mod domain;
pub mod config;
pub mod ops;
pub mod store;
pub mod classify;
pub mod render;
pub mod icon;
pub mod mobile;

pub use config::NavConfig;
pub use domain::{BlockAttributes, LinkField, LinkRecord, LinkTarget, NavError, NavResult};
pub use render::{MenuEntry, RenderMode};
pub use store::LinkListStore;
