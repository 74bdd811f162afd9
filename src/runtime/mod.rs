use std::sync::Arc;

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::loader::Loader;
use crate::media::LoftyExtractor;

mod cli;
mod event_loop;
mod logging;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli::Cli::parse();
    let (settings, settings_warning) = settings::load_settings();

    let log_path = logging::init(&settings.logging);
    if let Some(msg) = settings_warning {
        warn!("{msg}");
    }
    info!(log = ?log_path, "starting specto");

    let loader = Loader::new(Arc::new(LoftyExtractor));
    let mut app = App::new(&settings.ui);

    if let Some(path) = &cli.path {
        startup::open_file(&mut app, &loader, path);
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::default();
        event_loop::run(&mut terminal, &settings, &mut app, &loader, &mut state)
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("exiting");
    run_result
}
