//! Domain Layer
//!
//! Link records, the block attribute contract, and the errors shared by
//! every operation on them. Nothing here touches the host.

mod entity;
mod link;
mod attributes;

pub use entity::{NavError, NavResult};
pub use link::{LinkField, LinkRecord, LinkTarget};
pub use attributes::BlockAttributes;
