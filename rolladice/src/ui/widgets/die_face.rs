//! Pip-art die widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use rolladice_core::DieFace;

use crate::ui::theme::DiceTheme;

const PIP: &str = "●";

/// Scale at which the die is drawn in its larger frame.
pub const EXPANDED_SCALE: f32 = 1.1;

/// Widget drawing the current face inside the die card
pub struct DieFaceWidget<'a> {
    face: DieFace,
    scale: f32,
    pulsing: bool,
    theme: &'a DiceTheme,
}

impl<'a> DieFaceWidget<'a> {
    pub fn new(face: DieFace, theme: &'a DiceTheme) -> Self {
        Self {
            face,
            scale: 1.0,
            pulsing: false,
            theme,
        }
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn pulsing(mut self, pulsing: bool) -> Self {
        self.pulsing = pulsing;
        self
    }

    fn art(&self) -> Vec<String> {
        let expanded = self.scale >= EXPANDED_SCALE;
        let (pad, gap, rule) = if expanded {
            ("  ", "   ", "─".repeat(13))
        } else {
            (" ", "  ", "─".repeat(9))
        };

        let mut rows = vec![format!("╭{rule}╮")];
        for (i, row) in self.face.pips().iter().enumerate() {
            if expanded && i > 0 {
                rows.push(format!("│{}│", " ".repeat(13)));
            }
            let cells: Vec<&str> = row.iter().map(|&on| if on { PIP } else { " " }).collect();
            rows.push(format!("│{pad}{}{pad}│", cells.join(gap)));
        }
        rows.push(format!("╰{rule}╯"));
        rows
    }
}

impl Widget for DieFaceWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Die ")
            .borders(Borders::ALL)
            .border_style(self.theme.die_card_style(self.pulsing));

        let inner = block.inner(area);
        block.render(area, buf);

        let art = self.art();
        let top_pad = (inner.height as usize).saturating_sub(art.len()) / 2;

        let mut lines: Vec<Line> = vec![Line::from(""); top_pad];
        lines.extend(
            art.into_iter()
                .map(|row| Line::from(Span::styled(row, self.theme.die_style()))),
        );

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::buffer_text;

    fn draw(face: DieFace, scale: f32) -> String {
        let theme = DiceTheme::default();
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 9));
        DieFaceWidget::new(face, &theme)
            .scale(scale)
            .render(buf.area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_pip_count_matches_face() {
        for value in 1..=6 {
            let face = DieFace::from_value(value).unwrap();
            let text = draw(face, 1.0);
            assert_eq!(text.matches(PIP).count(), value as usize, "face {value}");
        }
    }

    #[test]
    fn test_bounce_draws_larger_die() {
        let resting = draw(DieFace::Five, 1.0);
        let bounced = draw(DieFace::Five, 1.2);

        assert!(resting.contains(&format!("╭{}╮", "─".repeat(9))));
        assert!(bounced.contains(&format!("╭{}╮", "─".repeat(13))));
        assert_eq!(bounced.matches(PIP).count(), 5);
    }

    #[test]
    fn test_art_rows_have_equal_width() {
        let theme = DiceTheme::default();
        for scale in [1.0, 1.2] {
            let widget = DieFaceWidget::new(DieFace::Six, &theme).scale(scale);
            let art = widget.art();
            let width = art[0].chars().count();
            assert!(art.iter().all(|row| row.chars().count() == width));
        }
    }
}
