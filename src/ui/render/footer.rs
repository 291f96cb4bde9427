use super::Frame;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, text::Span, widgets::Paragraph};

/// Return the key hints for the focused area.
///
fn controls_text(focus: Focus) -> &'static str {
    match focus {
        Focus::Search => {
            " Type to search, Backspace: delete, Ctrl-U: clear, Tab/Enter: stories, Esc: quit"
        }
        Focus::Stories => {
            " j/k: navigate, d: remove, o: show URL, l: toggle log, Tab or /: search, q: quit"
        }
    }
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let paragraph = Paragraph::new(Span::styled(
        controls_text(*state.current_focus()),
        styling::muted_text_style(state.get_theme()),
    ));
    frame.render_widget(paragraph, size);
}
