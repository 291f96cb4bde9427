use super::Frame;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

const BLOCK_TITLE: &str = "Search";

/// Render the search box, placing the cursor at the end of the term when
/// focused.
///
pub fn search(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let focused = *state.current_focus() == Focus::Search;

    let block = Block::default().borders(Borders::ALL);
    let block = if focused {
        block
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled(BLOCK_TITLE, styling::active_block_title_style(theme)))
    } else {
        block
            .border_style(styling::normal_block_border_style(theme))
            .title(BLOCK_TITLE)
    };

    let term = state.get_search_term();
    let paragraph = Paragraph::new(term.to_owned())
        .style(styling::normal_text_style(theme))
        .block(block);
    frame.render_widget(paragraph, size);

    if focused {
        let offset = u16::try_from(term.chars().count()).unwrap_or(u16::MAX);
        let max_x = size.x + size.width.saturating_sub(2);
        frame.set_cursor(
            (size.x + 1).saturating_add(offset).min(max_x),
            size.y + 1,
        );
    }
}
