//! Color theme and styling for the RollaDice TUI

use ratatui::style::{Color, Modifier, Style};

/// Screen color theme
#[derive(Debug, Clone)]
pub struct DiceTheme {
    // Base colors
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,

    // App bar
    pub app_bar_bg: Color,
    pub app_bar_fg: Color,

    // Die
    pub die_body: Color,
    pub pip: Color,
    pub pulse: Color,

    // Buttons
    pub roll_button: Color,
    pub reset_button: Color,
    pub button_text: Color,
}

impl Default for DiceTheme {
    fn default() -> Self {
        Self {
            foreground: Color::Reset,
            muted: Color::DarkGray,
            border: Color::Rgb(0x8E, 0xA7, 0xE9),
            border_focused: Color::Rgb(0x33, 0x99, 0xFF),

            app_bar_bg: Color::Rgb(0x33, 0x99, 0xFF),
            app_bar_fg: Color::Black,

            die_body: Color::White,
            pip: Color::Black,
            pulse: Color::Rgb(0xE2, 0xE8, 0xF4),

            roll_button: Color::Rgb(0x8E, 0xA7, 0xE9),
            reset_button: Color::Rgb(0xFF, 0x63, 0x47),
            button_text: Color::White,
        }
    }
}

impl DiceTheme {
    pub fn app_bar_style(&self) -> Style {
        Style::default()
            .bg(self.app_bar_bg)
            .fg(self.app_bar_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }

    /// Die card border, lit up while a haptic pulse is active
    pub fn die_card_style(&self, pulsing: bool) -> Style {
        if pulsing {
            Style::default()
                .fg(self.pulse)
                .add_modifier(Modifier::BOLD)
        } else {
            self.border_style(false)
        }
    }

    pub fn die_style(&self) -> Style {
        Style::default().fg(self.pip).bg(self.die_body)
    }

    /// Style for a button; pressed buttons are dimmed
    pub fn button_style(&self, color: Color, pressed: bool) -> Style {
        let style = Style::default()
            .bg(color)
            .fg(self.button_text)
            .add_modifier(Modifier::BOLD);
        if pressed {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }

    pub fn fun_fact_style(&self) -> Style {
        Style::default()
            .fg(self.foreground)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn score_style(&self) -> Style {
        Style::default()
            .fg(self.foreground)
            .add_modifier(Modifier::BOLD)
    }

    pub fn history_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.muted).add_modifier(Modifier::DIM)
    }
}
