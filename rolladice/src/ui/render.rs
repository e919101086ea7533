//! Render orchestration for the RollaDice TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Control};
use crate::ui::layout::{centered_rect_fixed, ScreenLayout};
use crate::ui::widgets::{ButtonWidget, DieFaceWidget, FunFactWidget, HistoryWidget};

pub const APP_TITLE: &str = "ROLLADICE";
pub const ROLL_LABEL: &str = "ROLL THE DICE";
pub const RESET_LABEL: &str = "Reset History";

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = ScreenLayout::calculate(area);
    let now = app.now();

    render_app_bar(frame, app, layout.app_bar);

    // Die
    let die = DieFaceWidget::new(app.dice.state().face(), &app.theme)
        .scale(app.dice.die_scale(now))
        .pulsing(app.pulse.is_active(now));
    frame.render_widget(die, layout.die_card);

    // Roll button
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.theme.border_style(false)),
        layout.button_card,
    );
    let roll = ButtonWidget::new(ROLL_LABEL, app.theme.roll_button, &app.theme)
        .pressed(app.dice.button_scale(now) < 1.0)
        .focused(app.focus == Control::Roll);
    frame.render_widget(roll, layout.roll_button);

    // Fun fact
    frame.render_widget(
        FunFactWidget::new(app.dice.state().fun_fact(), &app.theme),
        layout.fact_card,
    );

    render_score_card(frame, app, &layout);

    render_status_bar(frame, app, layout.status_bar);
    render_hotkey_bar(frame, app, layout.hotkey_bar);

    if app.show_help {
        render_help_overlay(frame, app, area);
    }
}

/// Render the app bar
fn render_app_bar(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![Line::from(""), Line::from(APP_TITLE)];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(app.theme.app_bar_style());
    frame.render_widget(paragraph, area);
}

/// Render total score, history and the reset button
fn render_score_card(frame: &mut Frame, app: &App, layout: &ScreenLayout) {
    let snapshot = app.dice.snapshot();

    frame.render_widget(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_style(app.theme.border_style(false)),
        layout.score_card,
    );

    frame.render_widget(
        Paragraph::new(format!("Total Score: {}", snapshot.score)).style(app.theme.score_style()),
        layout.score_line,
    );
    frame.render_widget(
        Paragraph::new("Roll History:").style(app.theme.score_style()),
        layout.history_title,
    );

    let history = HistoryWidget::new(&snapshot, &app.theme).scroll(app.history_scroll);
    frame.render_widget(history, layout.history_list);

    let reset = ButtonWidget::new(RESET_LABEL, app.theme.reset_button, &app.theme)
        .focused(app.focus == Control::Reset);
    frame.render_widget(reset, layout.reset_button);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let line = match app.status() {
        Some(message) => Line::from(Span::styled(
            format!(" {message}"),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(" Ready", app.theme.hint_style())),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the hotkey bar
fn render_hotkey_bar(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(Span::styled(
        " r Roll | x Reset | Tab Focus | ? Help | q Quit",
        app.theme.hint_style(),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect_fixed(46, 17, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let heading = Style::default().add_modifier(Modifier::UNDERLINED);
    let help_text = vec![
        Line::from(Span::styled(
            " RollaDice - Help ",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Dice:", heading)),
        Line::from("  r              Roll the die"),
        Line::from("  x/Backspace    Reset history"),
        Line::from("  Space/Enter    Press focused button"),
        Line::from("  Tab/Shift-Tab  Move focus"),
        Line::from("  Mouse click    Press a button"),
        Line::from(""),
        Line::from(Span::styled("History:", heading)),
        Line::from("  j/k or ↑/↓     Scroll"),
        Line::from("  g/G            Jump to newest/oldest"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or ? to close, q to quit",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);
}
