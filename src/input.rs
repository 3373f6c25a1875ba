//! Keyboard input handling.
//!
//! Maps terminal key events to [`App`] actions.  Which actions are
//! live depends on the current [`InputMode`]: browse mode treats keys
//! as commands, while the search and add modes route printable
//! characters into their text fields.
//!
//! ## For contributors
//!
//! To add a new keybinding:
//!
//! 1. Add a method on [`App`] for the action (if one doesn't exist).
//! 2. Add a `KeyCode` match arm in the relevant mode's handler below.
//! 3. Update the key hints in [`crate::ui`]'s status bar.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::{App, InputMode};

/// Process a single key event, updating app state accordingly.
///
/// Only reacts to key-press events (ignoring release / repeat) so that each
/// physical keypress triggers exactly one action.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match app.mode {
        InputMode::Browse => handle_browse(app, key),
        InputMode::Search => handle_search(app, key),
        InputMode::Add => handle_add(app, key),
    }
}

fn handle_browse(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        KeyCode::Enter | KeyCode::Char('b') => app.toggle_bookmark_selected(),
        KeyCode::Char('/') => app.enter_search(),
        KeyCode::Char('a') => app.enter_add(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Tab => app.cycle_filter(),
        // 1 = All, 2..4 = the categories in tab order.
        KeyCode::Char(c @ '1'..='4') => {
            app.set_filter_index(c as usize - '1' as usize);
        }
        _ => {}
    }
}

fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_search(),
        KeyCode::Enter => app.commit_search(),
        KeyCode::Backspace => app.search_pop(),
        KeyCode::Char(c) => app.search_push(c),
        _ => {}
    }
}

fn handle_add(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_add(),
        KeyCode::Enter => app.submit_add(),
        KeyCode::Backspace => app.draft_pop(),
        KeyCode::Tab => app.cycle_draft_category(),
        KeyCode::Char(c) => app.draft_push(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::{Category, CategoryFilter};
    use crate::theme::Theme;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    fn test_app() -> App {
        App::new(Theme::Light, None)
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = test_app();
        handle_key_event(&mut app, release(KeyCode::Char('q')));
        assert!(!app.quit);
    }

    #[test]
    fn q_quits_in_browse_mode() {
        let mut app = test_app();
        handle_key_event(&mut app, press(KeyCode::Char('q')));
        assert!(app.quit);
    }

    #[test]
    fn q_types_into_search_instead_of_quitting() {
        let mut app = test_app();
        handle_key_event(&mut app, press(KeyCode::Char('/')));
        handle_key_event(&mut app, press(KeyCode::Char('q')));
        assert!(!app.quit);
        assert_eq!(app.search, "q");
    }

    #[test]
    fn arrows_navigate_in_browse_mode() {
        let mut app = test_app();
        handle_key_event(&mut app, press(KeyCode::Down));
        handle_key_event(&mut app, press(KeyCode::Down));
        assert_eq!(app.list_state.selected(), Some(1));
        handle_key_event(&mut app, press(KeyCode::Up));
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn number_keys_pick_filter_tabs() {
        let mut app = test_app();
        handle_key_event(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.filter, CategoryFilter::Only(Category::Academics));
        handle_key_event(&mut app, press(KeyCode::Char('1')));
        assert_eq!(app.filter, CategoryFilter::All);
    }

    #[test]
    fn tab_cycles_filter_in_browse_mode() {
        let mut app = test_app();
        handle_key_event(&mut app, press(KeyCode::Tab));
        assert_eq!(app.filter, CategoryFilter::Only(Category::Events));
    }

    #[test]
    fn b_toggles_bookmark_on_selection() {
        let mut app = test_app();
        handle_key_event(&mut app, press(KeyCode::Down));
        let id = app.visible_items()[0].id;
        handle_key_event(&mut app, press(KeyCode::Char('b')));
        assert!(app.bookmarks.contains(id));
    }

    #[test]
    fn add_flow_through_keys() {
        let mut app = test_app();
        handle_key_event(&mut app, press(KeyCode::Char('a')));
        assert_eq!(app.mode, InputMode::Add);

        for c in "Quiz Night".chars() {
            handle_key_event(&mut app, press(KeyCode::Char(c)));
        }
        handle_key_event(&mut app, press(KeyCode::Tab)); // Events -> Academics
        handle_key_event(&mut app, press(KeyCode::Enter));

        assert_eq!(app.mode, InputMode::Browse);
        assert_eq!(app.store.items()[0].title, "Quiz Night");
        assert_eq!(app.store.items()[0].category, Category::Academics);
    }

    #[test]
    fn esc_in_add_mode_cancels_instead_of_quitting() {
        let mut app = test_app();
        handle_key_event(&mut app, press(KeyCode::Char('a')));
        handle_key_event(&mut app, press(KeyCode::Char('x')));
        handle_key_event(&mut app, press(KeyCode::Esc));
        assert!(!app.quit);
        assert_eq!(app.mode, InputMode::Browse);
        assert!(app.draft_title.is_empty());
    }

    #[test]
    fn backspace_edits_search() {
        let mut app = test_app();
        handle_key_event(&mut app, press(KeyCode::Char('/')));
        handle_key_event(&mut app, press(KeyCode::Char('a')));
        handle_key_event(&mut app, press(KeyCode::Char('b')));
        handle_key_event(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.search, "a");
    }

    #[test]
    fn t_toggles_theme_in_browse_mode() {
        let mut app = test_app();
        handle_key_event(&mut app, press(KeyCode::Char('t')));
        assert_eq!(app.theme, Theme::Dark);
    }
}
