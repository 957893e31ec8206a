//! Link List Operations
//!
//! Pure mutations over a link list. Every operation borrows the current
//! list and returns a new one; the caller decides what to do with it.

use std::collections::HashSet;

use crate::domain::{LinkField, LinkRecord, LinkTarget, NavError, NavResult};

/// Smallest id greater than every id in the list
pub fn next_id(list: &[LinkRecord]) -> u32 {
    fresh_id(list, 0)
}

/// An id no record in the list uses, at least `floor` when possible.
///
/// Normally one past the highest id. When that would overflow `u32`, the
/// lowest free id is used instead.
pub fn fresh_id(list: &[LinkRecord], floor: u32) -> u32 {
    let ids: HashSet<u32> = list.iter().map(|l| l.id).collect();
    let above_max = match ids.iter().max() {
        Some(max) => max.checked_add(1),
        None => Some(0),
    };
    match above_max.map(|id| id.max(floor)) {
        Some(id) if !ids.contains(&id) => id,
        _ => {
            let id = (0..=u32::MAX).find(|id| !ids.contains(id)).unwrap_or(floor);
            log::warn!("[OPS] Id space exhausted above {}, reusing free id {}", floor, id);
            id
        }
    }
}

/// Give every record whose id repeats an earlier one a fresh id.
///
/// Returns the list and whether any id changed. Parent references keep
/// pointing at the first record that carried the id.
pub fn dedupe_ids(list: &[LinkRecord]) -> (Vec<LinkRecord>, bool) {
    let mut links = list.to_vec();
    let mut seen = HashSet::new();
    let mut changed = false;
    for i in 0..links.len() {
        if seen.insert(links[i].id) {
            continue;
        }
        let id = fresh_id(&links, 0);
        log::debug!("[OPS] Duplicate id {} at {} becomes {}", links[i].id, i, id);
        links[i].id = id;
        seen.insert(id);
        changed = true;
    }
    (links, changed)
}

/// Append an empty top-level link with the given id
pub fn add_with_id(list: &[LinkRecord], id: u32, target: LinkTarget) -> Vec<LinkRecord> {
    let mut links = list.to_vec();
    links.push(LinkRecord::new(id, target));
    links
}

/// Append an empty top-level link with a fresh id
pub fn add(list: &[LinkRecord], target: LinkTarget) -> Vec<LinkRecord> {
    add_with_id(list, next_id(list), target)
}

/// Delete the record at `index`
pub fn remove(list: &[LinkRecord], index: usize) -> NavResult<Vec<LinkRecord>> {
    NavError::check_index(index, list.len())?;
    let mut links = list.to_vec();
    links.remove(index);
    Ok(links)
}

/// Replace one field of the record at `index`
pub fn update_field(list: &[LinkRecord], index: usize, field: LinkField) -> NavResult<Vec<LinkRecord>> {
    NavError::check_index(index, list.len())?;
    let mut links = list.to_vec();
    field.apply(&mut links[index]);
    Ok(links)
}

/// Move the record at `from` so that it ends up at `to`
pub fn reorder(list: &[LinkRecord], from: usize, to: usize) -> NavResult<Vec<LinkRecord>> {
    NavError::check_index(from, list.len())?;
    NavError::check_index(to, list.len())?;
    let mut links = list.to_vec();
    let moved = links.remove(from);
    links.insert(to, moved);
    Ok(links)
}

/// Reorder using positions within the top-level view.
///
/// Child records keep their absolute slots; only top-level records move.
pub fn reorder_top_level(list: &[LinkRecord], from: usize, to: usize) -> NavResult<Vec<LinkRecord>> {
    let slots: Vec<usize> = list
        .iter()
        .enumerate()
        .filter(|(_, l)| l.is_top_level())
        .map(|(i, _)| i)
        .collect();
    NavError::check_index(from, slots.len())?;
    NavError::check_index(to, slots.len())?;

    let mut top: Vec<LinkRecord> = slots.iter().map(|&i| list[i].clone()).collect();
    let moved = top.remove(from);
    top.insert(to, moved);

    let mut links = list.to_vec();
    for (slot, record) in slots.into_iter().zip(top) {
        links[slot] = record;
    }
    Ok(links)
}

/// Nest the record at `index` under `parent`, or lift it to top level with `None`
pub fn reparent(list: &[LinkRecord], index: usize, parent: Option<u32>) -> NavResult<Vec<LinkRecord>> {
    NavError::check_index(index, list.len())?;
    let record = &list[index];

    if let Some(parent_id) = parent {
        if parent_id == record.id {
            return Err(NavError::SelfParent(parent_id));
        }
        if record.group {
            return Err(NavError::NestedGroup(record.id));
        }
        if !list.iter().any(|l| l.id == parent_id && l.group) {
            return Err(NavError::UnknownParent(parent_id));
        }
    }

    let mut links = list.to_vec();
    links[index].is_child = parent.is_some();
    links[index].parent_menu = parent;
    Ok(links)
}
