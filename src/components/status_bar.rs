use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Widget,
};

use crate::text::{end_truncate, justify_with_gaps};
use crate::theme::ThemeColors;

/// Key hints shown when there is no status message.
pub const KEY_HINTS: &[&str] = &["h/j/k/l - move", "⏎ - open/navigate", "⌫ - up", "q - quit"];

/// Bottom bar: key hints spread across the width, or a status message.
pub struct StatusBarWidget<'a> {
    hints: &'a [&'a str],
    theme: &'a ThemeColors,
    status_message: Option<&'a str>,
    is_error: bool,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(hints: &'a [&'a str], theme: &'a ThemeColors) -> Self {
        Self {
            hints,
            theme,
            status_message: None,
            is_error: false,
        }
    }

    pub fn status_message(mut self, msg: &'a str, is_error: bool) -> Self {
        self.status_message = Some(msg);
        self.is_error = is_error;
        self
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let width = area.width as usize;

        let (content, style) = match self.status_message {
            Some(msg) => {
                let style = if self.is_error {
                    Style::default()
                        .fg(self.theme.error_fg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(self.theme.success_fg)
                };
                (end_truncate(msg, width), style)
            }
            None => (
                justify_with_gaps(self.hints, width),
                Style::default().fg(self.theme.hint_fg),
            ),
        };

        let line = Line::styled(content, style);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
