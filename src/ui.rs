//! Terminal UI rendering.
//!
//! All drawing logic lives here, separated from application state ([`App`])
//! and input handling ([`crate::input`]).  This makes it easy to change the
//! visual layout without touching business logic.
//!
//! ## Layout
//!
//! ```text
//! ┌ header: title, search query, theme ──────────────────┐
//! │ filter tabs: All / Events / Academics / Sports       │
//! ├───────────────────────────────┬──────────────────────┤
//! │ news list (scrollable)        │ category bar chart   │
//! ├───────────────────────────────┴──────────────────────┤
//! │ add form (only in add mode)                          │
//! │ status bar: message, counts, key hints               │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Colours come from [`crate::theme::Palette`], so every widget looks
//! right under both themes.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, InputMode};
use crate::news::CategoryFilter;
use crate::theme::Palette;

/// Draw the complete UI for one frame.
///
/// Called once per tick from the main loop.  Delegates to helper functions
/// for each screen region.
pub fn draw(app: &mut App, frame: &mut Frame) {
    let palette = app.theme.palette();

    // Fill the whole frame with the theme background first.
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.foreground)),
        frame.area(),
    );

    let add_form_height = if app.mode == InputMode::Add { 3 } else { 0 };
    let [header_area, tabs_area, main_area, add_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(add_form_height),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let [list_area, chart_area] =
        Layout::horizontal([Constraint::Min(30), Constraint::Length(34)]).areas(main_area);

    draw_header(app, &palette, frame, header_area);
    draw_filter_tabs(app, &palette, frame, tabs_area);
    draw_news_list(app, &palette, frame, list_area);
    draw_chart(app, &palette, frame, chart_area);
    if app.mode == InputMode::Add {
        draw_add_form(app, &palette, frame, add_area);
    }
    draw_status_bar(app, &palette, frame, status_area);
}

/// Top line: app title, live search query, theme indicator.
fn draw_header(app: &App, palette: &Palette, frame: &mut Frame, area: Rect) {
    let search_display = if app.mode == InputMode::Search {
        format!(" /{}_", app.search)
    } else if !app.search.is_empty() {
        format!(" /{}", app.search)
    } else {
        String::new()
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " News Board ",
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(search_display, Style::default().fg(palette.highlight)),
    ]));

    frame.render_widget(header, area);
}

/// The category filter tab row.
fn draw_filter_tabs(app: &App, palette: &Palette, frame: &mut Frame, area: Rect) {
    let titles: Vec<Line> = CategoryFilter::choices()
        .enumerate()
        .map(|(i, choice)| Line::from(format!(" {} {} ", i + 1, choice.label())))
        .collect();
    let selected = CategoryFilter::choices()
        .position(|c| c == app.filter)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(palette.dim))
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the scrollable, filtered news list.
fn draw_news_list(app: &mut App, palette: &Palette, frame: &mut Frame, area: Rect) {
    let bookmarks = &app.bookmarks;
    let list_items: Vec<ListItem> = app
        .visible_items()
        .iter()
        .map(|item| {
            let marker = if bookmarks.contains(item.id) { "★ " } else { "  " };

            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(palette.highlight)),
                Span::styled(item.title.clone(), Style::default().fg(palette.foreground)),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", item.category),
                    Style::default().fg(palette.accent),
                ),
            ]);

            ListItem::new(line)
        })
        .collect();

    let empty = list_items.is_empty();
    let list = List::new(list_items)
        .block(
            Block::default()
                .title(" News ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.dim)),
        )
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(palette.dim),
        )
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);

    if empty && area.width > 4 && area.height > 2 {
        // Centered hint inside the bordered region.
        let inner = Rect {
            x: area.x + 2,
            y: area.y + area.height / 2,
            width: area.width - 4,
            height: 1,
        };
        let hint = Paragraph::new(Span::styled(
            "no items match",
            Style::default().fg(palette.dim),
        ));
        frame.render_widget(hint, inner);
    }
}

/// Per-category bar chart over the whole store.
fn draw_chart(app: &App, palette: &Palette, frame: &mut Frame, area: Rect) {
    let counts = app.chart_data();
    let bars: Vec<Bar> = counts
        .iter()
        .map(|(category, count)| {
            Bar::default()
                .value(*count as u64)
                .label(Line::from(category.label()))
                .text_value(count.to_string())
                .style(Style::default().fg(palette.accent))
                .value_style(
                    Style::default()
                        .fg(palette.background)
                        .bg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" By category ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.dim)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(1);

    frame.render_widget(chart, area);
}

/// The add form, shown only while composing a new item.
fn draw_add_form(app: &App, palette: &Palette, frame: &mut Frame, area: Rect) {
    let form = Paragraph::new(Line::from(vec![
        Span::styled(app.draft_title.clone(), Style::default().fg(palette.foreground)),
        Span::styled("_", Style::default().fg(palette.highlight)),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", app.draft_category),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(
        Block::default()
            .title(" Add news (Enter: save, Tab: category, Esc: cancel) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent)),
    );

    frame.render_widget(form, area);
}

/// Render the bottom status bar.
fn draw_status_bar(app: &App, palette: &Palette, frame: &mut Frame, area: Rect) {
    let hints = match app.mode {
        InputMode::Browse => "q: quit  /: search  a: add  b: bookmark  t: theme  Tab/1-4: filter",
        InputMode::Search => "type to search  Enter: keep  Esc: clear",
        InputMode::Add => "type a title  Enter: save  Tab: category  Esc: cancel",
    };

    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(&app.status, Style::default().fg(palette.highlight)),
        Span::raw("  "),
        Span::styled(
            format!("{}/{} items", app.visible_items().len(), app.store.len()),
            Style::default().fg(palette.accent),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{} bookmarked", app.bookmarks.len()),
            Style::default().fg(palette.accent),
        ),
        Span::raw("  "),
        Span::styled(format!("[{}]", app.theme.label()), Style::default().fg(palette.dim)),
        Span::raw("  "),
        Span::styled(hints, Style::default().fg(palette.dim)),
    ]));
    frame.render_widget(status, area);
}
