//! News domain: item types, the in-memory store, filtering, and
//! bookmarks.
//!
//! Everything here is independent of the terminal UI. The app layer
//! owns a [`NewsStore`] and a [`BookmarkSet`] and derives the visible
//! list and chart data through [`filter`] and [`aggregate`] each
//! frame.

mod bookmarks;
mod filter;
mod item;
mod store;

// Re-export the public API of this module so callers can write
// `use crate::news::{Category, NewsItem, NewsStore, ...};`
pub use bookmarks::BookmarkSet;
pub use filter::{aggregate, filter};
pub use item::{Category, CategoryFilter, NewsItem};
pub use store::NewsStore;
