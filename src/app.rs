//! Application state.
//!
//! `App` owns everything the session knows: the news store, the
//! bookmark set, the search query, the active category filter, the
//! add-form draft, the theme, and the list selection. All mutation
//! happens through the methods here; rendering reads the state and
//! the derived [`App::visible_items`] / [`App::chart_data`] views.

use std::path::PathBuf;

use ratatui::widgets::ListState;

use crate::news::{aggregate, filter, BookmarkSet, Category, CategoryFilter, NewsItem, NewsStore};
use crate::theme::Theme;

/// Which widget keystrokes are routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Navigating the list; single-key commands are live.
    #[default]
    Browse,
    /// Typing into the search box.
    Search,
    /// Typing a new item's title into the add form.
    Add,
}

pub struct App {
    pub store: NewsStore,
    pub bookmarks: BookmarkSet,
    /// Current search query. Applied live while typing.
    pub search: String,
    /// Active category filter tab.
    pub filter: CategoryFilter,
    /// Title being typed into the add form.
    pub draft_title: String,
    /// Category the add form will attach to the new item.
    pub draft_category: Category,
    pub theme: Theme,
    pub mode: InputMode,
    /// List selection state for scrolling.
    pub list_state: ListState,
    /// Whether the user has requested to quit.
    pub quit: bool,
    /// Last action's outcome, shown in the status bar.
    pub status: String,
    /// Where to persist the theme. `None` disables persistence
    /// (used in tests).
    config_path: Option<PathBuf>,
}

impl App {
    pub fn new(theme: Theme, config_path: Option<PathBuf>) -> Self {
        Self {
            store: NewsStore::with_demo_items(),
            bookmarks: BookmarkSet::new(),
            search: String::new(),
            filter: CategoryFilter::All,
            draft_title: String::new(),
            draft_category: Category::Events,
            theme,
            mode: InputMode::default(),
            list_state: ListState::default(),
            quit: false,
            status: "Welcome to the news board".into(),
            config_path,
        }
    }

    // -- derived views -------------------------------------------------------

    /// The items currently visible under the search query and
    /// category filter, in store order.
    pub fn visible_items(&self) -> Vec<&NewsItem> {
        filter(self.store.items(), &self.search, self.filter)
    }

    /// Per-category counts over the whole store (not just the visible
    /// subset), feeding the chart.
    pub fn chart_data(&self) -> Vec<(Category, usize)> {
        aggregate(self.store.items())
    }

    // -- navigation ----------------------------------------------------------

    pub fn select_next(&mut self) {
        let len = self.visible_items().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        if self.visible_items().is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if !self.visible_items().is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        let len = self.visible_items().len();
        if len > 0 {
            self.list_state.select(Some(len - 1));
        }
    }

    /// Clamp the selection after the visible list may have shrunk
    /// (search edit, filter change).
    fn repair_selection(&mut self) {
        let len = self.visible_items().len();
        match self.list_state.selected() {
            Some(_) if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }

    // -- bookmarks -----------------------------------------------------------

    /// Toggle the bookmark on the currently selected visible item.
    /// No-op when nothing is selected.
    pub fn toggle_bookmark_selected(&mut self) {
        let selected = self
            .list_state
            .selected()
            .and_then(|i| self.visible_items().get(i).map(|item| (item.id, item.title.clone())));

        if let Some((id, title)) = selected {
            self.bookmarks.toggle(id);
            self.status = if self.bookmarks.contains(id) {
                format!("Bookmarked \"{title}\"")
            } else {
                format!("Removed bookmark on \"{title}\"")
            };
        }
    }

    // -- filtering -----------------------------------------------------------

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.repair_selection();
    }

    /// Advance to the next filter tab, wrapping from the last
    /// category back to All.
    pub fn cycle_filter(&mut self) {
        let choices: Vec<CategoryFilter> = CategoryFilter::choices().collect();
        let current = choices.iter().position(|c| *c == self.filter).unwrap_or(0);
        self.set_filter(choices[(current + 1) % choices.len()]);
    }

    /// Select a filter tab by position (0 = All). Out-of-range
    /// indices are ignored.
    pub fn set_filter_index(&mut self, index: usize) {
        if let Some(choice) = CategoryFilter::choices().nth(index) {
            self.set_filter(choice);
        }
    }

    // -- search --------------------------------------------------------------

    pub fn enter_search(&mut self) {
        self.mode = InputMode::Search;
    }

    pub fn search_push(&mut self, c: char) {
        self.search.push(c);
        self.repair_selection();
    }

    pub fn search_pop(&mut self) {
        self.search.pop();
        self.repair_selection();
    }

    /// Esc in search mode: clear the query entirely.
    pub fn cancel_search(&mut self) {
        self.search.clear();
        self.mode = InputMode::Browse;
        self.repair_selection();
    }

    /// Enter in search mode: keep the query, go back to browsing.
    pub fn commit_search(&mut self) {
        self.mode = InputMode::Browse;
    }

    // -- add form ------------------------------------------------------------

    pub fn enter_add(&mut self) {
        self.mode = InputMode::Add;
    }

    pub fn draft_push(&mut self, c: char) {
        self.draft_title.push(c);
    }

    pub fn draft_pop(&mut self) {
        self.draft_title.pop();
    }

    pub fn cycle_draft_category(&mut self) {
        self.draft_category = self.draft_category.next();
    }

    /// Esc in add mode: discard the draft.
    pub fn cancel_add(&mut self) {
        self.draft_title.clear();
        self.mode = InputMode::Browse;
    }

    /// Submit the add form. A blank title is silently ignored apart
    /// from a status message, and the form stays open; on success the
    /// draft is cleared and the new item appears at the top of the
    /// list.
    pub fn submit_add(&mut self) {
        match self.store.add(&self.draft_title, self.draft_category) {
            Some(item) => {
                self.status = format!("Added \"{}\" under {}", item.title, item.category);
                self.draft_title.clear();
                self.mode = InputMode::Browse;
            }
            None => {
                self.status = "Title is empty, nothing added".into();
            }
        }
    }

    // -- theme ---------------------------------------------------------------

    /// Flip the theme and persist the preference. A failed write is
    /// reported on the status line but never interrupts the session.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        self.status = format!("Switched to {} theme", self.theme.label());
        if let Some(path) = &self.config_path {
            if let Err(e) = self.theme.save(path) {
                self.status = format!("Theme switched but not saved: {e:#}");
            }
        }
    }
}
