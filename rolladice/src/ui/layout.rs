//! Layout calculations for the RollaDice TUI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::Control;

const ROLL_BUTTON_WIDTH: u16 = 24;
const RESET_BUTTON_WIDTH: u16 = 20;

const DIE_CARD_HEIGHT: u16 = 9;
const BUTTON_CARD_HEIGHT: u16 = 5;
const FACT_CARD_HEIGHT: u16 = 4;
/// Borders, score line, history title, three history rows and the reset button
const SCORE_CARD_MIN_HEIGHT: u16 = 10;
/// Below this the cards no longer fit in one column with a usable history
const STACKED_MIN_HEIGHT: u16 =
    DIE_CARD_HEIGHT + BUTTON_CARD_HEIGHT + FACT_CARD_HEIGHT + SCORE_CARD_MIN_HEIGHT;
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 56;

/// Screen areas, top to bottom: app bar, the four cards, status and hotkeys.
///
/// On short terminals the score card moves beside the other three.
pub struct ScreenLayout {
    pub app_bar: Rect,
    pub die_card: Rect,
    pub button_card: Rect,
    pub fact_card: Rect,
    pub score_card: Rect,
    pub status_bar: Rect,
    pub hotkey_bar: Rect,

    // Inside the cards
    pub roll_button: Rect,
    pub score_line: Rect,
    pub history_title: Rect,
    pub history_list: Rect,
    pub reset_button: Rect,
}

impl ScreenLayout {
    /// Calculate layout based on terminal size
    pub fn calculate(area: Rect) -> Self {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // App bar
                Constraint::Min(10),   // Cards
                Constraint::Length(1), // Status bar
                Constraint::Length(1), // Hotkey bar
            ])
            .split(area);

        // Cards sit in a centered column, 90% wide
        let column = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(5),
                Constraint::Percentage(90),
                Constraint::Percentage(5),
            ])
            .split(main_chunks[1])[1];

        let (die_card, button_card, fact_card, score_card) =
            if column.height < STACKED_MIN_HEIGHT && column.width >= SIDE_BY_SIDE_MIN_WIDTH {
                // Short terminal: score card gets its own column
                let halves = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                    .split(column);
                let left = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(DIE_CARD_HEIGHT),
                        Constraint::Length(BUTTON_CARD_HEIGHT),
                        Constraint::Min(FACT_CARD_HEIGHT),
                    ])
                    .split(halves[0]);
                (left[0], left[1], left[2], halves[1])
            } else {
                let cards = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(DIE_CARD_HEIGHT),
                        Constraint::Length(BUTTON_CARD_HEIGHT),
                        Constraint::Length(FACT_CARD_HEIGHT),
                        Constraint::Min(SCORE_CARD_MIN_HEIGHT),
                    ])
                    .split(column);
                (cards[0], cards[1], cards[2], cards[3])
            };

        let roll_button = centered_width(shrink(button_card), ROLL_BUTTON_WIDTH);

        let score_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Total score
                Constraint::Length(1), // "Roll History:"
                Constraint::Min(3),    // History list
                Constraint::Length(3), // Reset button
            ])
            .split(shrink(score_card));

        Self {
            app_bar: main_chunks[0],
            die_card,
            button_card,
            fact_card,
            score_card,
            status_bar: main_chunks[2],
            hotkey_bar: main_chunks[3],
            roll_button,
            score_line: score_chunks[0],
            history_title: score_chunks[1],
            history_list: score_chunks[2],
            reset_button: centered_width(score_chunks[3], RESET_BUTTON_WIDTH),
        }
    }

    /// Which control, if any, is under a screen cell
    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        if contains(self.roll_button, column, row) {
            Some(Control::Roll)
        } else if contains(self.reset_button, column, row) {
            Some(Control::Reset)
        } else {
            None
        }
    }
}

/// The area inside a one-cell border
pub fn shrink(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Center a fixed-width rect horizontally inside `area`
pub fn centered_width(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Center a fixed-size rect inside `area`
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let height = height.min(area.height);
    let rect = centered_width(area, width);
    Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..rect
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_stack_in_order() {
        let layout = ScreenLayout::calculate(Rect::new(0, 0, 80, 40));

        assert_eq!(layout.app_bar.height, 3);
        assert!(layout.die_card.y < layout.button_card.y);
        assert!(layout.button_card.y < layout.fact_card.y);
        assert!(layout.fact_card.y < layout.score_card.y);
        assert!(layout.score_card.bottom() <= layout.status_bar.y);
        assert_eq!(layout.hotkey_bar.bottom(), 40);
    }

    #[test]
    fn test_short_terminal_keeps_history_rows() {
        for height in [24, 30, 32] {
            let layout = ScreenLayout::calculate(Rect::new(0, 0, 80, height));

            assert!(layout.history_list.height >= 3, "80x{height}");
            // Score card sits beside the die, not below it
            assert!(layout.score_card.x >= layout.die_card.right());
            assert!(layout.fact_card.bottom() <= layout.status_bar.y);
            assert!(layout.reset_button.bottom() <= layout.status_bar.y);
        }
    }

    #[test]
    fn test_tall_terminal_history_grows() {
        let layout = ScreenLayout::calculate(Rect::new(0, 0, 80, 33));
        assert!(layout.history_list.height >= 3);
        assert!(layout.fact_card.y < layout.score_card.y);

        let taller = ScreenLayout::calculate(Rect::new(0, 0, 80, 50));
        assert!(taller.history_list.height > layout.history_list.height);
    }

    #[test]
    fn test_side_by_side_buttons_are_hit_tested() {
        let layout = ScreenLayout::calculate(Rect::new(0, 0, 80, 24));

        let roll = layout.roll_button;
        assert_eq!(layout.control_at(roll.x + 1, roll.y + 1), Some(Control::Roll));
        let reset = layout.reset_button;
        assert_eq!(layout.control_at(reset.x + 1, reset.y + 1), Some(Control::Reset));
    }

    #[test]
    fn test_buttons_are_hit_tested() {
        let layout = ScreenLayout::calculate(Rect::new(0, 0, 80, 40));

        let roll = layout.roll_button;
        assert_eq!(layout.control_at(roll.x, roll.y), Some(Control::Roll));
        assert_eq!(
            layout.control_at(roll.x + roll.width - 1, roll.y + roll.height - 1),
            Some(Control::Roll)
        );

        let reset = layout.reset_button;
        assert_eq!(layout.control_at(reset.x + 1, reset.y + 1), Some(Control::Reset));

        assert_eq!(layout.control_at(0, 0), None);
        assert_eq!(layout.control_at(roll.x + roll.width, roll.y), None);
    }

    #[test]
    fn test_buttons_are_centered() {
        let layout = ScreenLayout::calculate(Rect::new(0, 0, 100, 40));
        let roll = layout.roll_button;
        let card = layout.button_card;

        assert_eq!(roll.width, ROLL_BUTTON_WIDTH);
        let left = roll.x - card.x;
        let right = card.right() - roll.right();
        assert!(left.abs_diff(right) <= 1);
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let layout = ScreenLayout::calculate(Rect::new(0, 0, 10, 5));
        assert!(layout.roll_button.width <= 10);
        let _ = layout.control_at(3, 3);
    }

    #[test]
    fn test_centered_rect_fixed() {
        let rect = centered_rect_fixed(20, 10, Rect::new(0, 0, 60, 30));
        assert_eq!(rect, Rect::new(20, 10, 20, 10));
    }
}
