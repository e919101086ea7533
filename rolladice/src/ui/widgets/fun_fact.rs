//! Fun fact card

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::ui::theme::DiceTheme;

pub struct FunFactWidget<'a> {
    fact: &'a str,
    theme: &'a DiceTheme,
}

impl<'a> FunFactWidget<'a> {
    pub fn new(fact: &'a str, theme: &'a DiceTheme) -> Self {
        Self { fact, theme }
    }
}

impl Widget for FunFactWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Fun Fact ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));

        Paragraph::new(self.fact)
            .style(self.theme.fun_fact_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
