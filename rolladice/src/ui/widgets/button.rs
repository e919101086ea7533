//! Push button widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Color,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::DiceTheme;

/// A labelled button. Pressed buttons draw one cell smaller and dimmed.
pub struct ButtonWidget<'a> {
    label: &'a str,
    color: Color,
    pressed: bool,
    focused: bool,
    theme: &'a DiceTheme,
}

impl<'a> ButtonWidget<'a> {
    pub fn new(label: &'a str, color: Color, theme: &'a DiceTheme) -> Self {
        Self {
            label,
            color,
            pressed: false,
            focused: false,
            theme,
        }
    }

    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for ButtonWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = if self.pressed && area.width > 2 {
            Rect {
                x: area.x + 1,
                width: area.width - 2,
                ..area
            }
        } else {
            area
        };

        let style = self.theme.button_style(self.color, self.pressed);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused))
            .style(style);

        Paragraph::new(self.label)
            .alignment(Alignment::Center)
            .style(style)
            .block(block)
            .render(area, buf);
    }
}
