//! Roll history list

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use rolladice_core::Snapshot;

use crate::ui::theme::DiceTheme;

/// Scrollable `Roll i: v` list, most recent first
pub struct HistoryWidget<'a> {
    snapshot: &'a Snapshot<'a>,
    scroll: usize,
    theme: &'a DiceTheme,
}

impl<'a> HistoryWidget<'a> {
    pub fn new(snapshot: &'a Snapshot<'a>, theme: &'a DiceTheme) -> Self {
        Self {
            snapshot,
            scroll: 0,
            theme,
        }
    }

    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for HistoryWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let total = self.snapshot.history.len();
        let visible = area.height as usize;
        // Never scroll past the point where the last entry sits at the bottom
        let scroll = self.scroll.min(total.saturating_sub(visible));

        let mut lines: Vec<Line> = self
            .snapshot
            .history_lines()
            .skip(scroll)
            .take(visible)
            .map(|line| Line::from(Span::styled(line, self.theme.history_style())))
            .collect();

        let hidden = total.saturating_sub(scroll + visible);
        if hidden > 0 {
            if let Some(last) = lines.last_mut() {
                *last = Line::from(Span::styled(
                    format!("... {} more", hidden + 1),
                    self.theme.hint_style(),
                ));
            }
        }

        Paragraph::new(lines).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::buffer_text;
    use rolladice_core::{DiceState, FUN_FACTS};

    fn state_with(values: &[u8]) -> DiceState {
        let mut state = DiceState::new();
        for &v in values {
            state.apply_roll(v, FUN_FACTS[0]).unwrap();
        }
        state
    }

    fn draw(state: &DiceState, scroll: usize, height: u16) -> String {
        let theme = DiceTheme::default();
        let snapshot = state.snapshot();
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, height));
        HistoryWidget::new(&snapshot, &theme)
            .scroll(scroll)
            .render(buf.area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn test_newest_roll_first() {
        let text = draw(&state_with(&[2, 5, 1]), 0, 5);
        let first = text.lines().next().unwrap();
        assert_eq!(first.trim_end(), "Roll 1: 1");
        assert!(text.contains("Roll 3: 2"));
    }

    #[test]
    fn test_overflow_shows_more_marker() {
        let text = draw(&state_with(&[1, 2, 3, 4, 5]), 0, 3);
        assert!(text.contains("Roll 1: 5"));
        assert!(text.contains("Roll 2: 4"));
        assert!(text.contains("... 3 more"));
    }

    #[test]
    fn test_scroll_is_capped() {
        let text = draw(&state_with(&[1, 2, 3, 4, 5]), 99, 3);
        assert!(text.contains("Roll 3: 3"));
        assert!(text.contains("Roll 5: 1"));
        assert!(!text.contains("more"));
    }

    #[test]
    fn test_empty_history_draws_nothing() {
        let text = draw(&DiceState::new(), 0, 3);
        assert!(text.trim().is_empty());
    }
}
