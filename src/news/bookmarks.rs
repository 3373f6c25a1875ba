//! Bookmarked item ids.

use std::collections::HashSet;

/// The set of bookmarked item ids.
///
/// Holds ids only, never item data — items are looked up by id when a
/// bookmark needs to be rendered. Ids are never pruned: there is no
/// item-removal operation, so a bookmark can't outlive its item.
#[derive(Debug, Default)]
pub struct BookmarkSet {
    ids: HashSet<i64>,
}

impl BookmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the bookmark state of `id`: add it if absent, remove it if
    /// present. Toggling twice restores the original set.
    pub fn toggle(&mut self, id: i64) {
        if !self.ids.insert(id) {
            self.ids.remove(&id);
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
