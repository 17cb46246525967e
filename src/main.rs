mod app;
mod components;
mod error;
mod event;
mod fs;
mod handler;
mod logging;
mod nav;
mod text;
mod theme;
mod tui;
mod ui;

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc::UnboundedSender;

use crate::app::{App, BrowsePath, Command, LoadRequest};
use crate::error::AppError;
use crate::event::{Event, EventHandler};
use crate::fs::{listing, opener};
use crate::theme::ThemeColors;
use crate::tui::{install_panic_hook, Tui};

/// Browse a directory as a grid of tiles.
#[derive(Parser, Debug)]
#[command(name = "tilefm", version, about)]
struct Cli {
    /// Directory to browse (defaults to the current directory, then home)
    path: Option<PathBuf>,

    /// Write debug logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

/// Pick the starting directory. A file argument means its parent directory.
fn resolve_start_path(arg: Option<PathBuf>) -> error::Result<BrowsePath> {
    let path = arg
        .or_else(|| std::env::current_dir().ok())
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("/"));

    let path = path.canonicalize().map_err(|_| {
        AppError::InvalidPath(format!("{} does not exist", path.display()))
    })?;

    if path.is_dir() {
        return Ok(BrowsePath::new(path));
    }
    let parent = path.parent().map(Path::to_path_buf).unwrap_or(path);
    Ok(BrowsePath::new(parent))
}

/// List a directory on the blocking pool and post the result back.
fn spawn_load(request: LoadRequest, tx: UnboundedSender<Event>) {
    tokio::task::spawn_blocking(move || {
        let result = listing::list_dir(request.path.as_path());
        let _ = tx.send(Event::Listing(request, result));
    });
}

fn run_command(command: Command, tx: &UnboundedSender<Event>) {
    match command {
        Command::Load(request) => spawn_load(request, tx.clone()),
        Command::Open(path) => opener::open_in_background(&path),
    }
}

#[tokio::main]
async fn main() -> error::Result<()> {
    let cli = Cli::parse();

    if let Some(ref log_file) = cli.log_file {
        logging::init(log_file)?;
    }

    // Fail before touching the terminal if the start directory is unusable.
    let start = resolve_start_path(cli.path)?;
    let entries = listing::list_dir(start.as_path())?;
    tracing::info!(path = %start, entries = entries.len(), "starting");

    install_panic_hook();

    let mut tui = Tui::new()?;
    let theme = theme::default_theme();
    let mut app = App::new(start, entries);
    let (width, height) = tui.size()?;
    app.set_terminal_size(width, height);

    let events = EventHandler::new(Duration::from_millis(250));

    // Give the shell its terminal back even when the loop fails.
    let result = run(tui.terminal_mut(), &mut app, &theme, events).await;
    let restored = tui.restore();
    result.and(restored)
}

/// Draw, wait for the next event, act on it, until the user quits.
async fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    theme: &ThemeColors,
    mut events: EventHandler,
) -> error::Result<()> {
    let event_tx = events.sender();

    loop {
        terminal.draw(|frame| {
            ui::render(app, theme, frame);
        })?;

        let command = match events.next().await? {
            Event::Key(key) => handler::handle_key_event(app, key),
            Event::Tick => {
                app.clear_expired_status();
                None
            }
            Event::Resize(w, h) => app.on_resize(w, h),
            Event::Listing(request, result) => {
                app.apply_listing(request, result);
                None
            }
        };

        if let Some(command) = command {
            run_command(command, &event_tx);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn start_path_directory_is_used_as_is() {
        let tmp = TempDir::new().unwrap();
        let start = resolve_start_path(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(start.as_path(), tmp.path().canonicalize().unwrap());
    }

    #[test]
    fn start_path_file_uses_parent() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("readme.txt");
        File::create(&file).unwrap();
        let start = resolve_start_path(Some(file)).unwrap();
        assert_eq!(start.as_path(), tmp.path().canonicalize().unwrap());
    }

    #[test]
    fn start_path_missing_is_invalid() {
        let tmp = TempDir::new().unwrap();
        let err = resolve_start_path(Some(tmp.path().join("nope"))).unwrap_err();
        assert!(matches!(err, AppError::InvalidPath(_)));
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn start_path_defaults_to_current_dir() {
        let start = resolve_start_path(None).unwrap();
        assert!(start.as_path().is_dir());
    }

    #[test]
    fn cli_parses_path_and_log_file() {
        let cli = Cli::parse_from(["tilefm", "/tmp", "--log-file", "/tmp/tilefm.log"]);
        assert_eq!(cli.path, Some(PathBuf::from("/tmp")));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/tilefm.log")));
    }

    #[tokio::test]
    async fn run_draws_until_quit() {
        let tmp = TempDir::new().unwrap();
        File::create(tmp.path().join("notes.txt")).unwrap();
        let start = BrowsePath::new(tmp.path());
        let mut app = App::new(start.clone(), listing::list_dir(start.as_path()).unwrap());
        app.set_terminal_size(83, 22);
        let mut terminal = Terminal::new(TestBackend::new(83, 22)).unwrap();
        let theme = theme::default_theme();

        let events = EventHandler::new(Duration::from_millis(250));
        events
            .sender()
            .send(Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)))
            .unwrap();

        run(&mut terminal, &mut app, &theme, events).await.unwrap();
        assert!(app.should_quit);

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("notes.txt"));
    }
}
