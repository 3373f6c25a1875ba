//! The core data types of the news board.
//!
//! `NewsItem` is the single entry type everything else works with.
//! Categories are a closed enum so an item can never carry a tag the
//! rest of the application doesn't know about; the filter-only "All"
//! choice lives in a separate [`CategoryFilter`] type for the same
//! reason.

use std::fmt;

/// A topical tag for news items.
///
/// This is a closed set: the filter tabs, the add form, and the chart
/// all iterate [`Category::ALL`] so a new variant only needs to be
/// added here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Events,
    Academics,
    Sports,
}

impl Category {
    /// Every category, in display order.
    ///
    /// The chart and the filter tabs rely on this order being fixed.
    pub const ALL: [Category; 3] = [Category::Events, Category::Academics, Category::Sports];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Events => "Events",
            Category::Academics => "Academics",
            Category::Sports => "Sports",
        }
    }

    /// The next category in display order, wrapping around.
    ///
    /// Used by the add form to cycle the draft category with Tab.
    pub fn next(self) -> Category {
        match self {
            Category::Events => Category::Academics,
            Category::Academics => Category::Sports,
            Category::Sports => Category::Events,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the category filter tabs select.
///
/// "All" is not a [`Category`] — items can't carry it, only the filter
/// can.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter choices in tab order: All first, then every category.
    pub fn choices() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    /// Whether an item with `category` passes this filter.
    pub fn admits(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
        }
    }
}

/// A single news entry.
///
/// Items are immutable once created: there is no edit or delete
/// operation, so every field is set at construction and never touched
/// again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    /// Unique identifier, derived from the creation time in
    /// milliseconds (see `NewsStore::add` for the uniqueness
    /// guarantee). Bookmarks refer to items by this id.
    pub id: i64,

    /// Headline. Always non-empty and trimmed — the store refuses
    /// blank titles.
    pub title: String,

    /// Topical tag.
    pub category: Category,
}
