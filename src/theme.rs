//! Fixed colour palette for the grid browser.

use ratatui::style::Color;

/// All runtime colors used in the UI.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Chrome
    pub border_fg: Color,

    // Tiles
    pub tile_fg: Color,
    pub tile_dir_fg: Color,
    pub tile_selected_fg: Color,

    // Bars
    pub breadcrumb_fg: Color,
    pub hint_fg: Color,

    // Semantic colors
    pub error_fg: Color,
    pub success_fg: Color,
    pub dim_fg: Color,
}

/// The default palette: teal chrome with a yellow selection highlight.
pub fn default_theme() -> ThemeColors {
    ThemeColors {
        border_fg: Color::Rgb(42, 187, 174), // #2abbae

        tile_fg: Color::Rgb(205, 214, 244),      // #cdd6f4
        tile_dir_fg: Color::Rgb(137, 180, 250),  // #89b4fa
        tile_selected_fg: Color::Rgb(218, 219, 131), // #dadb83

        breadcrumb_fg: Color::Rgb(205, 214, 244),
        hint_fg: Color::Rgb(108, 112, 134), // #6c7086

        error_fg: Color::Rgb(243, 139, 168),   // #f38ba8
        success_fg: Color::Rgb(166, 227, 161), // #a6e3a1
        dim_fg: Color::Rgb(108, 112, 134),
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        default_theme()
    }
}
