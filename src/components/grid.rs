use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Widget,
};

use super::tile::TileWidget;
use crate::fs::listing::Entry;
use crate::nav::{GridShape, LayoutMetrics, NavigationState};
use crate::theme::ThemeColors;

const EMPTY_PLACEHOLDER: &str = "(empty directory)";

/// Paints the visible `rows x cols` window of entries as tiles.
pub struct GridWidget<'a> {
    entries: &'a [Entry],
    nav: &'a NavigationState,
    grid: GridShape,
    metrics: LayoutMetrics,
    theme: &'a ThemeColors,
}

impl<'a> GridWidget<'a> {
    pub fn new(
        entries: &'a [Entry],
        nav: &'a NavigationState,
        grid: GridShape,
        metrics: LayoutMetrics,
        theme: &'a ThemeColors,
    ) -> Self {
        Self {
            entries,
            nav,
            grid,
            metrics,
            theme,
        }
    }

    fn render_placeholder(&self, area: Rect, buf: &mut Buffer) {
        let width = EMPTY_PLACEHOLDER.len() as u16;
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height / 2;
        let line = Line::styled(
            EMPTY_PLACEHOLDER,
            Style::default()
                .fg(self.theme.dim_fg)
                .add_modifier(Modifier::ITALIC),
        );
        buf.set_line(x, y, &line, area.right().saturating_sub(x));
    }
}

impl<'a> Widget for GridWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        if self.entries.is_empty() {
            self.render_placeholder(area, buf);
            return;
        }

        let pitch_x = self.metrics.pitch_x() as usize;
        let pitch_y = self.metrics.pitch_y() as usize;
        let cols = self.grid.cols();

        // Center the grid horizontally
        let grid_width = cols * pitch_x;
        let margin_left = (area.width as usize).saturating_sub(grid_width) / 2;

        for row in 0..self.grid.rows() {
            let y = area.y as usize + row * pitch_y;
            if y >= area.bottom() as usize {
                break;
            }
            for col in 0..cols {
                let idx = (self.nav.viewport_row_offset + row) * cols + col;
                let Some(entry) = self.entries.get(idx) else {
                    break;
                };
                let x = area.x as usize + margin_left + col * pitch_x;
                if x >= area.right() as usize {
                    break;
                }

                let tile_area =
                    Rect::new(x as u16, y as u16, pitch_x as u16, pitch_y as u16).intersection(area);
                let selected = row == self.nav.cursor_row && col == self.nav.cursor_col;
                TileWidget::new(entry, self.theme)
                    .selected(selected)
                    .render(tile_area, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;
    use std::path::PathBuf;

    fn entries(n: usize) -> Vec<Entry> {
        (0..n)
            .map(|i| Entry {
                name: format!("file{i}"),
                path: PathBuf::from(format!("/tmp/file{i}")),
                is_dir: false,
                size: 0,
                modified: None,
            })
            .collect()
    }

    fn screen_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buf.cell((x, y)).unwrap().symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn renders_only_the_visible_window() {
        let tc = theme::default_theme();
        let items = entries(10);
        let nav = NavigationState {
            cursor_row: 0,
            cursor_col: 0,
            viewport_row_offset: 1,
        };
        let area = Rect::new(0, 0, 81, 14);
        let mut buf = Buffer::empty(area);
        GridWidget::new(&items, &nav, GridShape::new(2, 3), LayoutMetrics::DEFAULT, &tc)
            .render(area, &mut buf);

        let text = screen_text(&buf);
        assert!(!text.contains("file2 "));
        for i in 3..9 {
            assert!(text.contains(&format!("[F] file{i}")), "missing file{i}");
        }
        assert!(!text.contains("file9"));
    }

    #[test]
    fn selected_tile_is_highlighted() {
        let tc = theme::default_theme();
        let items = entries(4);
        let nav = NavigationState {
            cursor_row: 1,
            cursor_col: 0,
            viewport_row_offset: 0,
        };
        let area = Rect::new(0, 0, 81, 14);
        let mut buf = Buffer::empty(area);
        GridWidget::new(&items, &nav, GridShape::new(2, 3), LayoutMetrics::DEFAULT, &tc)
            .render(area, &mut buf);

        // Second row starts 7 lines down; its border is the highlight colour.
        assert_eq!(buf.cell((0, 7)).unwrap().fg, tc.tile_selected_fg);
        assert_eq!(buf.cell((0, 0)).unwrap().fg, tc.border_fg);
    }

    #[test]
    fn empty_directory_shows_placeholder() {
        let tc = theme::default_theme();
        let nav = NavigationState::new();
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        GridWidget::new(&[], &nav, GridShape::new(1, 2), LayoutMetrics::DEFAULT, &tc)
            .render(area, &mut buf);
        assert!(screen_text(&buf).contains(EMPTY_PLACEHOLDER));
    }

    #[test]
    fn grid_larger_than_area_is_clipped() {
        let tc = theme::default_theme();
        let items = entries(50);
        let nav = NavigationState::new();
        let area = Rect::new(0, 0, 30, 9);
        let mut buf = Buffer::empty(area);
        GridWidget::new(&items, &nav, GridShape::new(4, 4), LayoutMetrics::DEFAULT, &tc)
            .render(area, &mut buf);
        assert!(screen_text(&buf).contains("[F] file0"));
    }
}
