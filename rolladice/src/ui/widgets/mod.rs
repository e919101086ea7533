//! TUI widgets for the RollaDice screen

pub mod button;
pub mod die_face;
pub mod fun_fact;
pub mod history;

pub use button::ButtonWidget;
pub use die_face::DieFaceWidget;
pub use fun_fact::FunFactWidget;
pub use history::HistoryWidget;

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
