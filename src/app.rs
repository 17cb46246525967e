use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::error::Result;
use crate::fs::listing::Entry;
use crate::nav::{GridShape, LayoutMetrics, NavigationState};
use crate::text;

/// How long a status message stays in the bottom bar.
const STATUS_TTL_SECS: u64 = 3;

/// Absolute directory being browsed. Empty input means the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowsePath(PathBuf);

impl BrowsePath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.as_os_str().is_empty() {
            Self(PathBuf::from("/"))
        } else {
            Self(path)
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// The path with its last segment removed, or `None` at the root.
    pub fn parent(&self) -> Option<BrowsePath> {
        self.0.parent().map(BrowsePath::new)
    }
}

impl fmt::Display for BrowsePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// User intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Down,
    Up,
    Right,
    /// Enter the selected directory or open the selected file.
    Select,
    /// Go to the parent directory.
    Parent,
    Quit,
}

/// What a completed listing should do to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    /// Switch to a new directory and reset the cursor.
    Enter,
    /// Reload the current directory, keeping the cursor where possible.
    Refresh,
}

/// A directory listing the event loop should fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub generation: u64,
    pub path: BrowsePath,
    pub kind: LoadKind,
}

/// Side effect requested by the controller, executed by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load(LoadRequest),
    Open(PathBuf),
}

/// Transient message for the bottom bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    pub created: Instant,
}

/// Browser state: current directory, its entries, and the grid cursor.
pub struct App {
    pub path: BrowsePath,
    pub entries: Vec<Entry>,
    pub nav: NavigationState,
    pub grid: GridShape,
    pub metrics: LayoutMetrics,
    pub should_quit: bool,
    pub status_message: Option<StatusMessage>,
    /// Generation of the most recently issued load.
    generation: u64,
    /// Generation of the load still awaiting its listing, if any.
    pending: Option<u64>,
}

impl App {
    /// Create an app showing `entries` of `path`, which the caller already listed.
    pub fn new(path: BrowsePath, entries: Vec<Entry>) -> Self {
        Self {
            path,
            entries,
            nav: NavigationState::new(),
            grid: GridShape::default(),
            metrics: LayoutMetrics::DEFAULT,
            should_quit: false,
            status_message: None,
            generation: 0,
            pending: None,
        }
    }

    /// Handle one user action, returning any follow-up effect.
    pub fn handle_action(&mut self, action: Action) -> Option<Command> {
        let cols = self.grid.cols();
        let count = self.entries.len();

        let command = match action {
            Action::Left => {
                self.nav.move_left(cols);
                None
            }
            Action::Right => {
                self.nav.move_right(cols);
                None
            }
            Action::Down => {
                self.nav.move_down(self.grid, count);
                None
            }
            Action::Up => {
                self.nav.move_up(self.grid, count);
                None
            }
            Action::Select => self.select(),
            Action::Parent => self
                .path
                .parent()
                .map(|parent| self.request_load(parent, LoadKind::Enter)),
            Action::Quit => {
                self.quit();
                None
            }
        };

        self.nav.reclamp(self.grid, self.entries.len());
        command
    }

    /// Activate the tile under the cursor. Blank cells do nothing.
    fn select(&mut self) -> Option<Command> {
        let (name, path, is_dir) = self
            .selected_entry()
            .map(|entry| (entry.name.clone(), entry.path.clone(), entry.is_dir))?;
        if is_dir {
            Some(self.request_load(BrowsePath::new(path), LoadKind::Enter))
        } else {
            self.set_status_message(format!("Opening {name}"));
            Some(Command::Open(path))
        }
    }

    fn request_load(&mut self, path: BrowsePath, kind: LoadKind) -> Command {
        self.generation += 1;
        self.pending = Some(self.generation);
        tracing::debug!(generation = self.generation, path = %path, ?kind, "requesting listing");
        Command::Load(LoadRequest {
            generation: self.generation,
            path,
            kind,
        })
    }

    /// Recompute the grid for a terminal of `width` x `height` and re-clamp.
    pub fn set_terminal_size(&mut self, width: u16, height: u16) {
        self.grid = self.metrics.grid_shape(width, height);
        self.nav.reclamp(self.grid, self.entries.len());
    }

    /// Terminal resized: adopt the new grid and refresh the listing, unless
    /// a load is already on its way.
    pub fn on_resize(&mut self, width: u16, height: u16) -> Option<Command> {
        self.set_terminal_size(width, height);
        if self.is_loading() {
            return None;
        }
        Some(self.request_load(self.path.clone(), LoadKind::Refresh))
    }

    /// Apply a finished listing. Results from superseded requests are dropped.
    pub fn apply_listing(&mut self, request: LoadRequest, result: Result<Vec<Entry>>) {
        if request.generation != self.generation {
            tracing::debug!(
                generation = request.generation,
                current = self.generation,
                path = %request.path,
                "discarding stale listing"
            );
            return;
        }
        self.pending = None;

        match result {
            Ok(entries) => {
                self.entries = entries;
                match request.kind {
                    LoadKind::Enter => {
                        self.path = request.path;
                        self.nav.reset();
                    }
                    LoadKind::Refresh => {}
                }
                self.nav.reclamp(self.grid, self.entries.len());
            }
            Err(e) => {
                tracing::warn!(path = %request.path, error = %e, "listing failed");
                self.set_error_message(e.to_string());
            }
        }
    }

    /// True while a requested listing has not come back yet.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Index of the entry under the cursor, which may be a blank cell.
    pub fn selected_index(&self) -> usize {
        self.nav.selected_index(self.grid.cols())
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.entries.get(self.selected_index())
    }

    /// Breadcrumb of the current directory for a bar `width` columns wide.
    pub fn breadcrumb(&self, width: usize) -> String {
        text::breadcrumb(&self.path.as_path().to_string_lossy(), width)
    }

    pub fn set_status_message(&mut self, text: String) {
        self.status_message = Some(StatusMessage {
            text,
            is_error: false,
            created: Instant::now(),
        });
    }

    pub fn set_error_message(&mut self, text: String) {
        self.status_message = Some(StatusMessage {
            text,
            is_error: true,
            created: Instant::now(),
        });
    }

    /// Drop the status message once it has been shown long enough.
    pub fn clear_expired_status(&mut self) {
        if let Some(ref msg) = self.status_message {
            if msg.created.elapsed().as_secs() >= STATUS_TTL_SECS {
                self.status_message = None;
            }
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
