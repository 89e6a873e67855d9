//! spire_tui - Terminal front-end for the Aetherium Spires

mod app;
mod ui;

use app::{App, Overlay};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use spire_core::GameConfig;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Directory holding override TOML files
const CONFIG_DIR_ENV: &str = "SPIRE_CONFIG_DIR";
const LOG_DIR_ENV: &str = "SPIRE_LOG_DIR";

fn main() -> io::Result<()> {
    setup_logging()?;

    // Load before entering raw mode so errors reach the terminal
    let config = load_config()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key.code, key.modifiers, Instant::now());
                }
            }
        }

        // Fire due travel and enemy-turn timers
        app.tick(Instant::now());
    }
    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers, now: Instant) {
    match (code, modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.should_quit = true
        }
        (KeyCode::Char('?'), _) => app.toggle_help(),
        (KeyCode::Esc, _) => app.on_escape(),
        (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
        (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.on_left(),
        (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.on_right(),
        (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => app.on_enter(now),
        (KeyCode::Char(c @ '1'..='9'), _) => app.on_number(c as usize - '1' as usize, now),
        (KeyCode::Char('e'), _) => app.engage_enemy(now),
        (KeyCode::Char('c'), _) => app.toggle_overlay(Overlay::CharacterSheet),
        (KeyCode::Char('i'), _) => app.toggle_overlay(Overlay::Inventory),
        (KeyCode::Char('b'), _) => app.back_to_character_select(),
        (KeyCode::Char('r'), _) => app.try_again(now),
        (KeyCode::Char('g'), _) => app.give_up(now),
        (KeyCode::Char('s'), _) => app.export_snapshot(),
        _ => {}
    }
}

fn load_config() -> io::Result<GameConfig> {
    let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) else {
        return Ok(GameConfig::default());
    };
    GameConfig::load_from_dir(Path::new(&dir)).map_err(|e| {
        tracing::error!(error = %e, "failed to load config");
        io::Error::new(io::ErrorKind::InvalidData, e.to_string())
    })
}

/// File-only logging; the terminal belongs to the UI
fn setup_logging() -> io::Result<()> {
    let log_dir = std::env::var_os(LOG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("spire"));
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "spire.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Keep the writer alive for the whole process
    std::mem::forget(guard);

    tracing::info!("Log file: {}", log_dir.join("spire.log").display());
    Ok(())
}
