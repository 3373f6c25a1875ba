//! The in-memory news store.
//!
//! Holds the ordered collection of items for the session. The only
//! mutation is [`NewsStore::add`]; there is no edit or removal, so the
//! newest-added-first order established here is the order everything
//! downstream sees.

use chrono::Utc;

use super::item::{Category, NewsItem};

/// Ordered collection of news items, newest added first.
pub struct NewsStore {
    items: Vec<NewsItem>,
    /// Highest id handed out so far, so rapid adds within the same
    /// millisecond still get distinct ids.
    last_id: i64,
}

impl NewsStore {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            last_id: 0,
        }
    }

    /// A store pre-populated with the demo items shown on first launch.
    pub fn with_demo_items() -> Self {
        let mut store = Self::new();
        store.items = vec![
            NewsItem {
                id: 3,
                title: "New Sports Equipment Arrives".into(),
                category: Category::Sports,
            },
            NewsItem {
                id: 2,
                title: "Science Fair Winners".into(),
                category: Category::Academics,
            },
            NewsItem {
                id: 1,
                title: "School Annual Day Announced".into(),
                category: Category::Events,
            },
        ];
        store.last_id = 3;
        store
    }

    /// All items, newest added first.
    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a news item to the front of the list.
    ///
    /// The title is trimmed first; a title that is empty after
    /// trimming is silently ignored and `None` is returned. On
    /// success the new item is returned.
    pub fn add(&mut self, title: &str, category: Category) -> Option<&NewsItem> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let item = NewsItem {
            id: self.next_id(),
            title: title.to_string(),
            category,
        };
        self.items.insert(0, item);
        Some(&self.items[0])
    }

    /// Current time in milliseconds, bumped past the previous id when
    /// the clock hasn't advanced (or went backwards) since the last
    /// add.
    fn next_id(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }
}

impl Default for NewsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = NewsStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn demo_store_has_three_items_newest_first() {
        let store = NewsStore::with_demo_items();
        assert_eq!(store.len(), 3);
        assert_eq!(store.items()[0].category, Category::Sports);
        assert_eq!(store.items()[2].title, "School Annual Day Announced");
    }

    #[test]
    fn add_prepends_with_trimmed_title() {
        let mut store = NewsStore::with_demo_items();
        let item = store.add("  Exam Results  ", Category::Academics).expect("added");
        assert_eq!(item.title, "Exam Results");
        assert_eq!(item.category, Category::Academics);

        assert_eq!(store.len(), 4);
        assert_eq!(store.items()[0].title, "Exam Results", "new item goes to the front");
    }

    #[test]
    fn add_empty_title_is_noop() {
        let mut store = NewsStore::with_demo_items();
        assert!(store.add("", Category::Events).is_none());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn add_whitespace_only_title_is_noop() {
        let mut store = NewsStore::with_demo_items();
        assert!(store.add("   \t ", Category::Events).is_none());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn rapid_adds_get_distinct_ids() {
        let mut store = NewsStore::new();
        store.add("One", Category::Events);
        store.add("Two", Category::Events);
        store.add("Three", Category::Events);

        let ids: Vec<i64> = store.items().iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids[0] > ids[1] && ids[1] > ids[2], "ids strictly increase per add: {ids:?}");
    }

    #[test]
    fn ids_stay_ahead_of_demo_seed() {
        let mut store = NewsStore::with_demo_items();
        let item = store.add("Fresh", Category::Sports).expect("added");
        assert!(item.id > 3, "generated id must not collide with seed ids");
    }
}
