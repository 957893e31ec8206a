//! Link List Store
//!
//! Holds the current list together with the host's change callback. Every
//! successful mutation replaces the list and reports it to the callback.

use crate::domain::{LinkField, LinkRecord, LinkTarget, NavResult};
use crate::ops;

pub struct LinkListStore<F>
where
    F: FnMut(&[LinkRecord]),
{
    links: Vec<LinkRecord>,
    on_change: F,
    default_target: LinkTarget,
    /// Next id to hand out; only ever grows
    next_id: u32,
}

impl<F> LinkListStore<F>
where
    F: FnMut(&[LinkRecord]),
{
    /// Take ownership of a loaded list.
    ///
    /// Records sharing an id are renumbered and the repaired list is
    /// reported to `on_change` straight away.
    pub fn new(links: Vec<LinkRecord>, default_target: LinkTarget, mut on_change: F) -> Self {
        let (links, changed) = ops::dedupe_ids(&links);
        if changed {
            log::warn!("[STORE] Loaded list had duplicate ids, renumbered");
            on_change(&links);
        }
        let next_id = ops::next_id(&links);
        Self {
            links,
            on_change,
            default_target,
            next_id,
        }
    }

    pub fn links(&self) -> &[LinkRecord] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    fn commit(&mut self, links: Vec<LinkRecord>) {
        self.links = links;
        (self.on_change)(&self.links);
    }

    /// Append an empty link and return its id
    pub fn add(&mut self) -> u32 {
        let id = ops::fresh_id(&self.links, self.next_id);
        self.next_id = id.saturating_add(1);
        let links = ops::add_with_id(&self.links, id, self.default_target);
        log::debug!("[STORE] Added link {} at position {}", id, links.len() - 1);
        self.commit(links);
        id
    }

    pub fn remove(&mut self, index: usize) -> NavResult<()> {
        let links = ops::remove(&self.links, index).inspect_err(|e| log::warn!("[STORE] remove: {}", e))?;
        log::debug!("[STORE] Removed link at {}", index);
        self.commit(links);
        Ok(())
    }

    pub fn update_field(&mut self, index: usize, field: LinkField) -> NavResult<()> {
        let name = field.name();
        let links = ops::update_field(&self.links, index, field)
            .inspect_err(|e| log::warn!("[STORE] update {}: {}", name, e))?;
        log::debug!("[STORE] Updated {} of link at {}", name, index);
        self.commit(links);
        Ok(())
    }

    pub fn reorder(&mut self, from: usize, to: usize) -> NavResult<()> {
        let links = ops::reorder(&self.links, from, to).inspect_err(|e| log::warn!("[STORE] reorder: {}", e))?;
        log::debug!("[STORE] Moved link {} -> {}", from, to);
        self.commit(links);
        Ok(())
    }

    /// Reorder by positions within the top-level view
    pub fn reorder_top_level(&mut self, from: usize, to: usize) -> NavResult<()> {
        let links = ops::reorder_top_level(&self.links, from, to)
            .inspect_err(|e| log::warn!("[STORE] reorder top level: {}", e))?;
        log::debug!("[STORE] Moved top-level link {} -> {}", from, to);
        self.commit(links);
        Ok(())
    }

    pub fn reparent(&mut self, index: usize, parent: Option<u32>) -> NavResult<()> {
        let links = ops::reparent(&self.links, index, parent).inspect_err(|e| log::warn!("[STORE] reparent: {}", e))?;
        log::debug!("[STORE] Link at {} now under {:?}", index, parent);
        self.commit(links);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BlockAttributes, NavError};
    use crate::render::{grouped, MenuEntry};
    use std::cell::RefCell;

    #[test]
    fn test_every_mutation_reports_new_list() {
        let saved = RefCell::new(Vec::<Vec<LinkRecord>>::new());
        let mut store = LinkListStore::new(Vec::new(), LinkTarget::SelfTab, |links: &[LinkRecord]| {
            saved.borrow_mut().push(links.to_vec())
        });

        store.add();
        store.add();
        store.update_field(0, LinkField::Text("Home".into())).unwrap();
        store.reorder(0, 1).unwrap();
        store.remove(0).unwrap();
        drop(store);

        let saved = saved.into_inner();
        assert_eq!(saved.len(), 5);
        assert_eq!(saved[4].len(), 1);
        assert_eq!(saved[4][0].text, "Home");
    }

    #[test]
    fn test_failed_mutation_is_not_reported() {
        let mut calls = 0;
        let mut store = LinkListStore::new(Vec::new(), LinkTarget::SelfTab, |_: &[LinkRecord]| calls += 1);
        assert!(matches!(store.remove(0), Err(NavError::IndexOutOfRange { .. })));
        assert!(store.is_empty());
        drop(store);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_ids_never_reused_after_remove() {
        let mut store = LinkListStore::new(Vec::new(), LinkTarget::NewTab, |_: &[LinkRecord]| {});
        let first = store.add();
        let second = store.add();
        store.remove(1).unwrap();
        let third = store.add();
        assert_eq!((first, second, third), (0, 1, 2));
        assert_eq!(store.links()[1].target, LinkTarget::NewTab);
    }

    #[test]
    fn test_legacy_duplicate_ids_are_repaired() {
        let attrs = BlockAttributes::from_json(
            r#"{"links":[{"text":"About","group":true},{"text":"Work","group":true}]}"#,
        )
        .unwrap();
        let saved = RefCell::new(Vec::<Vec<LinkRecord>>::new());
        let mut store = LinkListStore::new(attrs.links, LinkTarget::SelfTab, |links: &[LinkRecord]| {
            saved.borrow_mut().push(links.to_vec())
        });
        assert_eq!(store.links()[0].id, 0);
        assert_eq!(store.links()[1].id, 1);

        let id = store.add();
        assert_eq!(id, 2);
        store.reparent(2, Some(0)).unwrap();

        let counts: Vec<usize> = grouped(store.links())
            .into_iter()
            .filter_map(|entry| match entry {
                MenuEntry::Group { children, .. } => Some(children.len()),
                _ => None,
            })
            .collect();
        assert_eq!(counts, vec![1, 0]);
        drop(store);

        // Repair is persisted before any edit
        let saved = saved.into_inner();
        assert_eq!(saved.len(), 3);
        assert_eq!(saved[0][1].id, 1);
    }

    #[test]
    fn test_clean_list_is_not_reported_on_load() {
        let mut calls = 0;
        let store = LinkListStore::new(
            vec![LinkRecord::link(0, "Home", "/"), LinkRecord::link(1, "Blog", "/blog")],
            LinkTarget::SelfTab,
            |_: &[LinkRecord]| calls += 1,
        );
        drop(store);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_add_at_max_id_does_not_overflow() {
        let mut store = LinkListStore::new(
            vec![LinkRecord::link(u32::MAX, "Last", "/")],
            LinkTarget::SelfTab,
            |_: &[LinkRecord]| {},
        );
        let id = store.add();
        assert_eq!(id, 0);
        let again = store.add();
        assert_eq!(again, 1);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_build_submenu() {
        let mut store = LinkListStore::new(Vec::new(), LinkTarget::SelfTab, |_: &[LinkRecord]| {});
        let parent = store.add();
        store.update_field(0, LinkField::Group(true)).unwrap();
        store.add();
        store.reparent(1, Some(parent)).unwrap();
        assert!(store.reparent(0, Some(parent)).is_err());

        let links = store.links();
        assert!(links[1].is_child);
        assert_eq!(links[1].parent_menu, Some(parent));
    }
}
