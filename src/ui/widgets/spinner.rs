use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Spinner animation frames.
///
pub const FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Return the loading widget for the current spinner frame, vertically
/// centered within the given height.
///
pub fn widget(state: &State, height: u16) -> Paragraph<'static> {
    let frame = FRAMES[*state.get_spinner_index() % FRAMES.len()];
    let padding = (height.saturating_sub(2) / 2) as usize;
    let mut lines = vec![Line::from(""); padding];
    lines.push(Line::from(Span::styled(
        format!("{} Loading...", frame),
        styling::normal_text_style(state.get_theme()),
    )));
    Paragraph::new(lines).alignment(Alignment::Center)
}
