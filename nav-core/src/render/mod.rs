//! Menu Rendering
//!
//! Projects a link list into menu entries. The editor preview and the
//! public markup both consume the same projection.

mod html;

pub use html::render_nav;

use serde::{Deserialize, Serialize};

use crate::classify::{children_of, top_level};
use crate::domain::LinkRecord;

/// Which list topology to project into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// One item per record, no nesting
    Flat,
    /// Top-level items with submenus under their headings
    #[default]
    Grouped,
}

/// One rendered menu item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Link {
        text: String,
        href: String,
        target: &'static str,
    },
    Label {
        text: String,
    },
    Group {
        label: String,
        children: Vec<MenuEntry>,
    },
    /// Stands in for an empty list
    Placeholder,
}

impl MenuEntry {
    fn link(record: &LinkRecord) -> Self {
        let href = if record.url.is_empty() { "#" } else { record.url.as_str() };
        MenuEntry::Link {
            text: record.text.clone(),
            href: href.to_string(),
            target: record.target.as_str(),
        }
    }

    fn label(record: &LinkRecord) -> Self {
        MenuEntry::Label {
            text: record.text.clone(),
        }
    }
}

/// Project using the given mode
pub fn project(list: &[LinkRecord], mode: RenderMode) -> Vec<MenuEntry> {
    match mode {
        RenderMode::Flat => flat(list),
        RenderMode::Grouped => grouped(list),
    }
}

/// One entry per record in list order
pub fn flat(list: &[LinkRecord]) -> Vec<MenuEntry> {
    if list.is_empty() {
        return vec![MenuEntry::Placeholder];
    }
    list.iter()
        .map(|record| {
            if record.group {
                MenuEntry::label(record)
            } else {
                MenuEntry::link(record)
            }
        })
        .collect()
}

/// Top-level records, with each heading followed by its children
pub fn grouped(list: &[LinkRecord]) -> Vec<MenuEntry> {
    if list.is_empty() {
        return vec![MenuEntry::Placeholder];
    }
    top_level(list)
        .into_iter()
        .map(|record| {
            if record.group {
                MenuEntry::Group {
                    label: record.text.clone(),
                    children: children_of(list, record.id)
                        .into_iter()
                        .map(MenuEntry::link)
                        .collect(),
                }
            } else {
                MenuEntry::link(record)
            }
        })
        .collect()
}

/// Labels shown in the editor canvas: one per record, then the close control
pub fn preview_labels(list: &[LinkRecord], placeholder: &str, close_label: &str) -> Vec<String> {
    if list.is_empty() {
        return vec![placeholder.to_string()];
    }
    list.iter()
        .map(|l| l.text.clone())
        .chain(std::iter::once(close_label.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LinkTarget;

    #[test]
    fn test_flat_single_link() {
        let mut home = LinkRecord::link(0, "Home", "/");
        home.target = LinkTarget::SelfTab;
        assert_eq!(
            flat(&[home]),
            vec![MenuEntry::Link {
                text: "Home".to_string(),
                href: "/".to_string(),
                target: "_self",
            }]
        );
    }

    #[test]
    fn test_empty_list_placeholder() {
        assert_eq!(flat(&[]), vec![MenuEntry::Placeholder]);
        assert_eq!(grouped(&[]), vec![MenuEntry::Placeholder]);
    }

    #[test]
    fn test_grouped_parent_with_one_child() {
        let list = vec![
            LinkRecord::group(0, "About"),
            LinkRecord::child(1, "Team", "/team", 0),
        ];
        let entries = grouped(&list);
        assert_eq!(entries.len(), 1);
        match &entries[0] {
            MenuEntry::Group { label, children } => {
                assert_eq!(label, "About");
                assert_eq!(children.len(), 1);
                assert!(matches!(&children[0], MenuEntry::Link { href, .. } if href == "/team"));
            }
            other => panic!("expected group, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_url_renders_hash() {
        let entries = flat(&[LinkRecord::new(0, LinkTarget::NewTab)]);
        assert_eq!(
            entries[0],
            MenuEntry::Link {
                text: String::new(),
                href: "#".to_string(),
                target: "_blank",
            }
        );
    }

    #[test]
    fn test_flat_shows_groups_as_labels_and_keeps_children() {
        let list = vec![
            LinkRecord::group(0, "About"),
            LinkRecord::child(1, "Team", "/team", 0),
        ];
        let entries = project(&list, RenderMode::Flat);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], MenuEntry::Label { text: "About".to_string() });
    }

    #[test]
    fn test_grouped_drops_orphans() {
        let list = vec![
            LinkRecord::link(0, "Home", "/"),
            LinkRecord::child(1, "Lost", "/lost", 7),
        ];
        assert_eq!(grouped(&list).len(), 1);
    }

    #[test]
    fn test_preview_labels() {
        let list = vec![LinkRecord::link(0, "Home", "/")];
        assert_eq!(preview_labels(&list, "Nothing to list", "Close Menu"), vec!["Home", "Close Menu"]);
        assert_eq!(preview_labels(&[], "Nothing to list", "Close Menu"), vec!["Nothing to list"]);
    }
}
