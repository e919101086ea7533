//! Event handling for the RollaDice TUI

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::{App, Control};
use crate::ui::ScreenLayout;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

/// Handle a mouse event
fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            app.scroll_up(3);
            EventResult::NeedsRedraw
        }
        MouseEventKind::ScrollDown => {
            app.scroll_down(3);
            EventResult::NeedsRedraw
        }
        MouseEventKind::Down(MouseButton::Left) if !app.show_help => {
            let layout = ScreenLayout::calculate(app.viewport);
            match layout.control_at(mouse.column, mouse.row) {
                Some(control) => {
                    app.activate(control);
                    EventResult::NeedsRedraw
                }
                None => EventResult::Continue,
            }
        }
        _ => EventResult::Continue,
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // Global shortcuts (always work)
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    if app.show_help {
        return handle_help_key(app, key);
    }

    match key.code {
        KeyCode::Char('q') => EventResult::Quit,

        // Help
        KeyCode::Char('?') | KeyCode::F(1) => {
            app.toggle_help();
            EventResult::NeedsRedraw
        }

        // Buttons
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.activate_focused();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('r') => {
            app.activate(Control::Roll);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('x') | KeyCode::Backspace => {
            app.activate(Control::Reset);
            EventResult::NeedsRedraw
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.cycle_focus();
            EventResult::NeedsRedraw
        }

        // History navigation
        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll_down(1);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.scroll_up(1);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.scroll_to_top();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('G') | KeyCode::End => {
            app.scroll_to_bottom();
            EventResult::NeedsRedraw
        }

        KeyCode::Esc if app.status().is_some() => {
            app.clear_status();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Handle key when the help overlay is open
fn handle_help_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1) => {
            app.toggle_help();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('q') => EventResult::Quit,
        _ => EventResult::Continue,
    }
}
