//! newsboard — a terminal news board.
//!
//! ## Architecture overview
//!
//! ```text
//!                          draw()   ┌──────────┐
//!              ┌──────────┐ ──────► │  ui.rs   │
//!              │  app.rs  │         │ (render) │
//!              │ (state)  │         └──────────┘
//!              └──────────┘
//!                   ▲
//!                   │ handle_key_event()
//!              ┌──────────┐
//!              │ input.rs │
//!              └──────────┘
//! ```
//!
//! * **`news/`** — the domain: item types, store, filtering,
//!   aggregation, bookmarks.
//! * **`theme`** — dark/light palettes and the persisted preference.
//! * **`app`** — owns all application state (store, bookmarks, search,
//!   filter, drafts, selection).
//! * **`ui`** — pure rendering: reads `App` state and draws widgets.
//! * **`input`** — maps key events to `App` mutations.
//! * **`main`** — wires everything together: load the theme, set up
//!   the terminal, and run the event loop.

mod app;
mod input;
mod news;
mod theme;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use theme::Theme;

// ---------------------------------------------------------------------------
// RAII terminal guard — idiomatic cleanup even on panic
// ---------------------------------------------------------------------------

/// Manages terminal raw-mode and alternate-screen lifetime via [`Drop`].
///
/// Constructing this struct enters raw mode + alternate screen.  When the
/// value is dropped (normally or during stack unwinding) it restores the
/// terminal.  This prevents the common TUI bug where a panic leaves the
/// terminal in a broken state.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Install a panic hook that restores the terminal before printing the
/// panic message.  Without this, a panic inside the event loop would leave
/// raw mode enabled and the alternate screen active.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    install_panic_hook();

    // -- load the persisted theme preference ---------------------------------
    // A missing or unusable config directory only disables persistence;
    // the board itself always starts.
    let config_path = theme::config_path().ok();
    let initial_theme = config_path
        .as_deref()
        .map(Theme::load)
        .unwrap_or_default();

    // -- terminal setup (RAII — Drop restores on exit or panic) --------------
    let mut guard = TerminalGuard::new()?;
    let mut app = App::new(initial_theme, config_path);

    // -- main event loop -----------------------------------------------------
    // Runs at ~10 fps (100 ms tick).  Every state transition happens
    // synchronously inside handle_key_event; there is no background
    // work, so each iteration just renders and waits for input.
    let tick_rate = Duration::from_millis(100);

    loop {
        guard.terminal.draw(|f| ui::draw(&mut app, f))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key_event(&mut app, key);
            }
        }

        if app.quit {
            break;
        }
    }

    // `guard` is dropped here, restoring the terminal.
    Ok(())
}
