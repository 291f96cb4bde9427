use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, text::Span, widgets::Paragraph};

/// Render the headline with the total comment count.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State) {
    let text = format!(
        " My Hacker Stories ({} total comments)",
        state.get_total_comments()
    );
    let paragraph = Paragraph::new(Span::styled(
        text,
        styling::banner_style(state.get_theme()),
    ));
    frame.render_widget(paragraph, size);
}
