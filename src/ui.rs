use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::app::App;
use crate::components::grid::GridWidget;
use crate::components::status_bar::{StatusBarWidget, KEY_HINTS};
use crate::theme::ThemeColors;

/// Render the application UI: breadcrumb bar, tile grid, key-hint bar.
pub fn render(app: &App, theme: &ThemeColors, frame: &mut Frame) {
    let area = frame.area();
    let border_style = Style::default().fg(theme.border_fg);

    let screen = Block::bordered().border_style(border_style);
    let inner = screen.inner(area);
    frame.render_widget(screen, area);

    let [top, grid_area, bottom] = Layout::vertical([
        Constraint::Length(app.metrics.top_bar),
        Constraint::Min(0),
        Constraint::Length(app.metrics.bottom_bar),
    ])
    .areas(inner);

    // Breadcrumb of the current directory
    let top_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(border_style)
        .padding(Padding::top(1));
    let crumb_width = top_block.inner(top).width as usize;
    let crumb = Paragraph::new(Line::styled(
        app.breadcrumb(crumb_width),
        Style::default().fg(theme.breadcrumb_fg),
    ))
    .block(top_block);
    frame.render_widget(crumb, top);

    let grid = GridWidget::new(&app.entries, &app.nav, app.grid, app.metrics, theme);
    frame.render_widget(grid, grid_area);

    let bottom_block = Block::default()
        .borders(Borders::TOP)
        .border_style(border_style)
        .padding(Padding::top(1));
    let bar_area = bottom_block.inner(bottom);
    frame.render_widget(bottom_block, bottom);

    let mut status_bar = StatusBarWidget::new(KEY_HINTS, theme);
    if let Some(ref msg) = app.status_message {
        status_bar = status_bar.status_message(&msg.text, msg.is_error);
    }
    frame.render_widget(status_bar, bar_area);
}
