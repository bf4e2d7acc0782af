mod app;
mod catalog;
mod config;
mod effects;
mod error;
mod events;
mod log;
mod selector;
mod store;
mod surface;
mod tui;

use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;

use app::App;
use config::Config;
use effects::{DesktopNotifier, HostNotify};
use events::EventHandler;
use selector::Selector;
use store::FileStore;
use surface::TuiSurface;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut state_dir_override: Option<PathBuf> = None;
    let mut no_notify = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--state-dir" | "-s" => {
                if i + 1 < args.len() {
                    state_dir_override = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                    continue;
                } else {
                    eprintln!("Warning: --state-dir requires a path argument");
                    i += 1;
                }
            }
            "--no-notify" => {
                no_notify = true;
            }
            _ => {
                // Unknown flag, ignore
            }
        }
        i += 1;
    }

    // Load config with precedence: CLI > env var > config file > default
    let config = Config::load().with_overrides(
        state_dir_override,
        if no_notify { Some(false) } else { None },
    );
    let state_dir = config.state_dir();

    // Initialize logging and panic hook
    if let Ok(log_path) = log::init(&state_dir) {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    // Wire the widget: storage gateway, presentation surface, and the
    // optional host notification capability
    let store = FileStore::new(state_dir);
    let selector = Selector::new(TuiSurface::new(), store)?;
    let notifier: Option<Box<dyn HostNotify>> = if config.notifications() {
        Some(Box::new(DesktopNotifier))
    } else {
        None
    };
    let mut app = App::new(selector, notifier);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App<FileStore>) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Event stream for keyboard and mouse
    let mut event_stream = EventStream::new();

    loop {
        // Render
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        tokio::select! {
            // Terminal events (keyboard, mouse)
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event {
                    let action = EventHandler::handle_event(app, &event);
                    if !app.apply(action) {
                        return Ok(());
                    }
                }
            }

            // Timeout to keep the UI responsive and drive the bounce
            _ = tokio::time::sleep(Duration::from_millis(80)) => {
                app.tick();
            }
        }
    }
}
