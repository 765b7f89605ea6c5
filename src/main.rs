mod app;
mod banner;
mod catalog;
mod global_prefs;
mod handlers;
mod logging;
mod model;
mod screens;
mod sound;
mod state;
mod ui;
mod widgets;

use app::App;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event as CEvent, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use global_prefs::GlobalPrefs;
use ratatui::{backend::CrosstermBackend, Terminal};
use sound::SoundManager;
use state::{AppConfig, AppError};
use std::{env, error::Error, io, path::PathBuf, time::Duration};
use tokio::sync::mpsc;
use tracing::{error, info};

/// Application events
enum AppEvent {
    Terminal(CEvent),
    Tick,
}

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to a file; stdout belongs to the UI
    let _log_guard = logging::init_logging(&logging::log_dir())?;

    // Preferences path from the command line, $TURF_PREFS, or the home directory
    let prefs_path = env::args().nth(1).map(PathBuf::from).unwrap_or_else(GlobalPrefs::config_path);
    let prefs = global_prefs::init_global_prefs(&prefs_path);
    info!(path = %prefs_path.display(), ?prefs, "starting turf");

    let config = AppConfig {
        default_vibe: prefs.default_vibe,
        tick_rate_ms: prefs.tick_rate_ms,
        ..AppConfig::default()
    };
    let mut app = App::new(SoundManager::new(), config, prefs_path);

    let mut terminal = setup_terminal()?;

    let result = run_app(&mut app, &mut terminal, Duration::from_millis(prefs.tick_rate_ms)).await;

    // Cleanup, even when the loop failed
    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "ui loop failed");
    }
    info!("bye");
    result.map_err(Into::into)
}

/// Raw mode, alternate screen and mouse capture. A failure part way through
/// undoes whatever was already switched on.
fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let terminal = execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
        .and_then(|_| Terminal::new(CrosstermBackend::new(io::stdout())));
    if let Err(e) = &terminal {
        error!(error = %e, "terminal setup failed");
        if let Err(restore_err) = restore_terminal() {
            error!(error = %restore_err, "terminal restore failed");
        }
    }
    terminal
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
}

async fn run_app(app: &mut App, terminal: &mut Tui, tick_rate: Duration) -> Result<(), AppError> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    // Spawn terminal event handler
    tokio::spawn(async move {
        let mut events = EventStream::new();
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            let app_event = tokio::select! {
                _ = interval.tick() => AppEvent::Tick,
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => AppEvent::Terminal(event),
                    Some(Err(e)) => {
                        error!(error = %e, "terminal event stream failed");
                        break;
                    }
                    None => break,
                },
            };
            if event_tx.send(app_event).is_err() {
                break;
            }
        }
    });

    // Main application loop
    while !app.ui.should_quit {
        terminal.draw(|f| ui::ui(f, app))?;

        match event_rx.recv().await {
            Some(AppEvent::Terminal(CEvent::Key(key))) => handlers::handle_key_event(key, app),
            Some(AppEvent::Terminal(CEvent::Mouse(mouse))) => handlers::handle_mouse_event(mouse, app),
            Some(AppEvent::Terminal(_)) => {}
            Some(AppEvent::Tick) => app.on_tick(),
            None => return Err(AppError::Terminal("terminal event stream closed".to_string())),
        }
    }
    Ok(())
}
