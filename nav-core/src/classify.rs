//! Link Classification
//!
//! Read-only views over a link list. Recomputed on every call.

use crate::domain::LinkRecord;

/// Records shown at the top of the menu, in order
pub fn top_level(list: &[LinkRecord]) -> Vec<&LinkRecord> {
    list.iter().filter(|l| !l.is_child).collect()
}

/// Submenu headings, selectable as parents
pub fn parents(list: &[LinkRecord]) -> Vec<&LinkRecord> {
    list.iter().filter(|l| l.group).collect()
}

/// Children nested under `parent_id`, skipping self-parented records
pub fn children_of(list: &[LinkRecord], parent_id: u32) -> Vec<&LinkRecord> {
    list.iter()
        .filter(|l| l.is_child && l.parent_menu == Some(parent_id) && !l.is_self_parented())
        .collect()
}

/// Children that no submenu heading will pick up
pub fn orphans(list: &[LinkRecord]) -> Vec<&LinkRecord> {
    list.iter()
        .filter(|l| l.is_child)
        .filter(|l| {
            l.is_self_parented()
                || !l
                    .parent_menu
                    .is_some_and(|pid| list.iter().any(|p| p.id == pid && p.group && !p.is_child))
        })
        .collect()
}
