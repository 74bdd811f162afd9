//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::{App, Row};
use crate::catalog::{Locale, ui_text, welcome_lines};
use crate::config::UiSettings;

/// Key bindings shown in the footer: keys, English, Chinese.
static CONTROLS: &[(&str, &str, &str)] = &[
    ("j/k", "up/down", "上/下"),
    ("gg/G", "top/bottom", "顶部/底部"),
    ("tab/h/l", "switch track", "切换轨道"),
    ("enter", "expand/collapse", "展开/折叠"),
    ("/", "search", "搜索"),
    ("L", "language", "语言"),
    ("e/E", "export txt/json", "导出 txt/json"),
    ("r", "reload", "重新加载"),
    ("q", "quit", "退出"),
];

const PADDED: Padding = Padding {
    left: 1,
    right: 0,
    top: 0,
    bottom: 0,
};

/// Render the controls help text in `locale`.
fn controls_text(locale: Locale) -> String {
    CONTROLS
        .iter()
        .map(|(keys, en, zh)| {
            let desc = match locale {
                Locale::En => en,
                Locale::Zh => zh,
            };
            format!("[{keys}] {desc}")
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Window `[start, end)` of `total` rows that fits `height` and keeps
/// `selected` centered when possible, plus the selection's offset in it.
fn visible_window(total: usize, height: usize, selected: usize) -> (usize, usize, usize) {
    if total <= height || height == 0 {
        return (0, total, selected);
    }
    let half = height / 2;
    let mut start = selected.saturating_sub(half);
    if start + height > total {
        start = total - height;
    }
    (start, start + height, selected - start)
}

fn row_text(row: &Row) -> String {
    if row.is_category() {
        let marker = if row.open { '▾' } else { '▸' };
        format!("{marker} {}", row.label)
    } else {
        format!("    {}: {}", row.label, row.value.as_deref().unwrap_or(""))
    }
}

fn status_text(app: &App) -> String {
    let locale = app.locale;
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(
        " {}: {}",
        ui_text("language", locale).to_uppercase(),
        ui_text("language_name", locale)
    ));

    let q = app.filter_query.trim();
    if app.filter_mode || !q.is_empty() {
        let label = ui_text("search", locale).to_uppercase();
        if q.is_empty() {
            parts.push(format!("{label}: {}", ui_text("search_placeholder", locale)));
        } else {
            parts.push(format!(
                "{label}: {q} ({})",
                app.visibility.visible_leaf_count()
            ));
        }
    }

    match &app.path {
        Some(path) => parts.push(path.display().to_string()),
        None => parts.push(ui_text("no_file_selected", locale).to_string()),
    }

    parts.push(app.status.render(locale));
    parts.join(" • ")
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let locale = app.locale;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", ui_text("title", locale)))
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Status box
    let mut status_par = Paragraph::new(status_text(app))
        .block(
            Block::bordered()
                .padding(PADDED)
                .title(format!(" {} ", ui_text("status", locale))),
        )
        .wrap(Wrap { trim: true });
    if app.status.is_error() {
        status_par = status_par.fg(Color::Red);
    }
    frame.render_widget(status_par, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(1)])
        .split(chunks[2]);
    draw_tracks(frame, app, body[0]);
    draw_tree(frame, app, body[1]);

    let footer = Paragraph::new(controls_text(locale))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", ui_text("controls", locale)))
                .padding(PADDED),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}

fn draw_tracks(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .tracks
        .iter()
        .map(|track| ListItem::new(track.label()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", ui_text("tracks", app.locale))),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if app.has_tracks() {
        state.select(Some(app.selected_track));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_tree(frame: &mut Frame, app: &App, area: Rect) {
    let locale = app.locale;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", ui_text("media_information", locale)));

    // Placeholder states share one paragraph.
    let placeholder: Option<Vec<Line>> = if app.loading {
        Some(vec![Line::from(ui_text("loading", locale))])
    } else if let Some(err) = &app.load_error {
        Some(vec![
            Line::from(format!("❌ {}: {err}", ui_text("error", locale))).fg(Color::Red),
        ])
    } else if !app.has_tracks() {
        Some(welcome_lines(locale).iter().map(|l| Line::from(*l)).collect())
    } else {
        None
    };

    if let Some(lines) = placeholder {
        let paragraph = Paragraph::new(lines)
            .block(block.padding(PADDED))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
        return;
    }

    let rows = app.rows();
    if rows.is_empty() {
        let paragraph =
            Paragraph::new(ui_text("no_matches", locale)).block(block.padding(PADDED));
        frame.render_widget(paragraph, area);
        return;
    }

    // Only build ListItems for the visible window.
    let height = area.height.saturating_sub(2) as usize;
    let (start, end, selected) = visible_window(rows.len(), height, app.cursor);
    let items: Vec<ListItem> = rows[start..end]
        .iter()
        .map(|row| {
            let item = ListItem::new(row_text(row));
            if row.is_category() {
                item.bold()
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}
