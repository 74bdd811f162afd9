use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::warn;

use crate::app::{App, Status};
use crate::config::{self, ExportSettings};
use crate::export::{ExportFormat, default_export_path, export_to_path};
use crate::loader::Loader;
use crate::runtime::startup;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
#[derive(Debug, Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
}

/// Main terminal event loop: applies finished loads, draws, handles input.
/// Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    loader: &Loader,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        while let Some(outcome) = loader.try_recv() {
            app.accept_load(outcome);
        }

        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, loader, state) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply one key press. Returns `true` when the app should quit.
fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    loader: &Loader,
    state: &mut EventLoopState,
) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if app.filter_mode {
        state.pending_gg = false;
        match key.code {
            KeyCode::Esc => app.clear_filter(),
            KeyCode::Backspace => app.pop_filter_char(),
            KeyCode::Enter => app.exit_filter_mode(),
            KeyCode::Down => app.cursor_down(),
            KeyCode::Up => app.cursor_up(),
            KeyCode::Char(c) => {
                if !c.is_control() {
                    app.push_filter_char(c);
                }
            }
            _ => {}
        }
        return false;
    }

    if key.code != KeyCode::Char('g') {
        state.pending_gg = false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('/') => app.enter_filter_mode(),
        KeyCode::Esc => app.clear_filter(),
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                app.cursor_top();
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => app.cursor_bottom(),
        KeyCode::Char('j') | KeyCode::Down => app.cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => app.cursor_up(),
        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => app.next_track(),
        KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => app.prev_track(),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_at_cursor(),
        KeyCode::Char('L') => app.toggle_locale(),
        KeyCode::Char('e') => export_current(app, &settings.export, ExportFormat::Text),
        KeyCode::Char('E') => export_current(app, &settings.export, ExportFormat::Json),
        KeyCode::Char('r') => {
            if let Some(path) = app.path.clone() {
                startup::open_file(app, loader, &path);
            }
        }
        _ => {}
    }

    false
}

/// Export every loaded track next to the source file (or into the
/// configured directory) and report the result on the status line.
fn export_current(app: &mut App, settings: &ExportSettings, format: ExportFormat) {
    let source = match &app.path {
        Some(path) if app.has_tracks() => path.clone(),
        _ => {
            app.status = Status::NothingToExport;
            return;
        }
    };

    let target = default_export_path(&source, format, settings);
    match export_to_path(&target, &app.tracks, app.locale, settings) {
        Ok(_) => app.status = Status::Exported(target),
        Err(e) => {
            warn!("export failed: {e}");
            app.status = Status::ExportFailed(e.to_string());
        }
    }
}
