use std::time::SystemTime;

use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Padding, Widget},
};

use crate::fs::listing::Entry;
use crate::text::{center_truncate, format_size, justify_with_gaps};
use crate::theme::ThemeColors;

/// Text shown inside one tile, already fitted to the cell width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileText {
    /// `[D] name` or `[F] name`, center-truncated.
    pub name_line: String,
    /// Modification date on the left, size on the right.
    pub info_line: String,
}

impl TileText {
    /// Lines in tile order: spacer, name, spacer, info, spacer.
    pub fn lines(&self) -> [&str; 5] {
        ["", self.name_line.as_str(), "", self.info_line.as_str(), ""]
    }
}

fn format_date(modified: Option<SystemTime>) -> String {
    modified
        .map(|t| DateTime::<Local>::from(t).format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Lay out the text of `entry` for a tile `width` columns wide.
pub fn tile_text(entry: &Entry, width: usize) -> TileText {
    let tag = if entry.is_dir { "D" } else { "F" };
    let name_line = center_truncate(&format!("[{tag}] {}", entry.name), width);

    let size = if entry.is_dir {
        "-".to_string()
    } else {
        format_size(entry.size)
    };
    let info_line = justify_with_gaps(&[format_date(entry.modified), size], width);

    TileText {
        name_line,
        info_line,
    }
}

/// A bordered tile describing one entry.
pub struct TileWidget<'a> {
    entry: &'a Entry,
    theme: &'a ThemeColors,
    selected: bool,
}

impl<'a> TileWidget<'a> {
    pub fn new(entry: &'a Entry, theme: &'a ThemeColors) -> Self {
        Self {
            entry,
            theme,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl<'a> Widget for TileWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let (border_style, text_style) = if self.selected {
            let style = Style::default().fg(self.theme.tile_selected_fg);
            (style, style.add_modifier(Modifier::BOLD))
        } else if self.entry.is_dir {
            (
                Style::default().fg(self.theme.border_fg),
                Style::default().fg(self.theme.tile_dir_fg),
            )
        } else {
            (
                Style::default().fg(self.theme.border_fg),
                Style::default().fg(self.theme.tile_fg),
            )
        };

        let block = Block::bordered()
            .border_style(border_style)
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);

        let text = tile_text(self.entry, inner.width as usize);
        for (i, content) in text.lines().iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.bottom() {
                break;
            }
            let line = Line::styled(*content, text_style);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
