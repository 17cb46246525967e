//! Cursor and viewport state for the tile grid.
//!
//! The entry list is a flat sequence reshaped into rows of `cols` tiles. The
//! cursor lives inside the visible viewport; `viewport_row_offset` counts the
//! grid rows scrolled past above it. None of this owns the entry list: the
//! caller passes the grid shape and entry count on every call.

/// Number of fully visible tile rows and columns. Both are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    rows: usize,
    cols: usize,
}

impl GridShape {
    /// Build a shape, clamping both dimensions to at least 1.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}

impl Default for GridShape {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Fixed tile and chrome dimensions, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    /// Tile width excluding its border.
    pub tile_width: u16,
    /// Tile height excluding its border.
    pub tile_height: u16,
    /// Extra columns each tile takes horizontally (its border).
    pub h_gap: u16,
    /// Extra rows each tile takes vertically (its border).
    pub v_gap: u16,
    pub top_bar: u16,
    pub bottom_bar: u16,
    /// Outer screen border thickness, applied on every side.
    pub border: u16,
}

impl LayoutMetrics {
    pub const DEFAULT: LayoutMetrics = LayoutMetrics {
        tile_width: 25,
        tile_height: 5,
        h_gap: 2,
        v_gap: 2,
        top_bar: 3,
        bottom_bar: 3,
        border: 1,
    };

    /// Columns between the left edges of two adjacent tiles.
    pub fn pitch_x(&self) -> u16 {
        self.tile_width + self.h_gap
    }

    /// Rows between the top edges of two vertically adjacent tiles.
    pub fn pitch_y(&self) -> u16 {
        self.tile_height + self.v_gap
    }

    /// How many whole tiles fit in a terminal of `width` x `height` cells.
    pub fn grid_shape(&self, width: u16, height: u16) -> GridShape {
        let content_w = width.saturating_sub(2 * self.border);
        let content_h = height
            .saturating_sub(2 * self.border)
            .saturating_sub(self.top_bar)
            .saturating_sub(self.bottom_bar);

        let cols = content_w / self.pitch_x().max(1);
        let rows = content_h / self.pitch_y().max(1);
        GridShape::new(rows as usize, cols as usize)
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Cursor position within the viewport plus the viewport's scroll offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub cursor_row: usize,
    pub cursor_col: usize,
    pub viewport_row_offset: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the first entry with no scrolling.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Index into the flat entry list under the cursor.
    ///
    /// May point past the end of the list on a partially filled row.
    pub fn selected_index(&self, cols: usize) -> usize {
        (self.viewport_row_offset + self.cursor_row) * cols + self.cursor_col
    }

    /// Absolute grid row under the cursor.
    fn global_row(&self) -> usize {
        self.viewport_row_offset + self.cursor_row
    }

    pub fn move_left(&mut self, cols: usize) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        } else {
            self.cursor_col = cols.max(1) - 1;
        }
    }

    pub fn move_right(&mut self, cols: usize) {
        if self.cursor_col + 1 < cols {
            self.cursor_col += 1;
        } else {
            self.cursor_col = 0;
        }
    }

    /// Move one row down, scrolling when the cursor is at the viewport's
    /// bottom edge. From the last populated row, wraps to the first entry.
    pub fn move_down(&mut self, grid: GridShape, entry_count: usize) {
        if entry_count == 0 {
            return;
        }
        let cols = grid.cols();
        let last_global_row = (entry_count - 1) / cols;

        // Row-granular: wraps from anywhere on the last row, even from a
        // column to the right of the final entry. `>=` also catches a
        // viewport scrolled past the last row.
        if self.global_row() >= last_global_row {
            self.reset();
            return;
        }

        let next_row = self.cursor_row + 1;
        let next_index = (self.viewport_row_offset + next_row) * cols + self.cursor_col;
        if next_row < grid.rows() && next_index < entry_count {
            self.cursor_row = next_row;
        } else {
            self.viewport_row_offset += 1;
        }
    }

    /// Move one row up, scrolling when the cursor is at the viewport's top
    /// edge. From the very first row, wraps to the last entry.
    pub fn move_up(&mut self, grid: GridShape, entry_count: usize) {
        if entry_count == 0 {
            return;
        }
        if self.cursor_row > 0 {
            self.cursor_row -= 1;
        } else if self.viewport_row_offset > 0 {
            self.viewport_row_offset -= 1;
        } else {
            self.jump_to_last(grid, entry_count);
        }
    }

    /// Select the last entry, showing the final page fully.
    fn jump_to_last(&mut self, grid: GridShape, entry_count: usize) {
        let cols = grid.cols();
        let last = entry_count - 1;
        let last_row = last / cols;
        let total_rows = last_row + 1;

        self.viewport_row_offset = total_rows.saturating_sub(grid.rows());
        self.cursor_row = last_row - self.viewport_row_offset;
        self.cursor_col = last % cols;
    }

    /// Restore the invariants after the entry count or grid shape changed.
    ///
    /// Keeps the cursor inside the viewport and on a real entry. When the
    /// cursor is past the end it moves to the last entry, scrolling up only
    /// if that entry would be above the viewport. Idempotent.
    pub fn reclamp(&mut self, grid: GridShape, entry_count: usize) {
        if entry_count == 0 {
            self.reset();
            return;
        }

        let cols = grid.cols();
        let rows = grid.rows();

        if self.cursor_col >= cols {
            self.cursor_col = cols - 1;
        }
        if self.cursor_row >= rows {
            // Keep the same absolute row, now at the viewport's bottom edge.
            self.viewport_row_offset += self.cursor_row - (rows - 1);
            self.cursor_row = rows - 1;
        }

        if self.selected_index(cols) < entry_count {
            return;
        }

        let last = entry_count - 1;
        let last_row = last / cols;
        if last_row < self.viewport_row_offset {
            self.viewport_row_offset = last_row;
        }
        self.cursor_row = last_row - self.viewport_row_offset;
        self.cursor_col = last % cols;
    }
}
