use super::Frame;
use crate::state::{Focus, State};
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

const ERROR_MESSAGE: &str = "Something went wrong...";
const EMPTY_MESSAGE: &str = "No stories";
const REMOVE_LABEL: &str = "[Remove]";

/// Column widths: title, author, comments, points, remove.
///
const COLUMN_WIDTHS: [Constraint; 5] = [
    Constraint::Percentage(40),
    Constraint::Percentage(30),
    Constraint::Percentage(10),
    Constraint::Percentage(10),
    Constraint::Percentage(10),
];

/// Render the stories list, or the loading and error indicators.
///
pub fn stories(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let focused = *state.current_focus() == Focus::Stories;
    let title = format!("Stories ({})", state.get_stories().stories.len());

    let block = Block::default().borders(Borders::ALL);
    let block = if focused {
        block
            .border_style(styling::active_block_border_style(&theme))
            .title(Span::styled(title, styling::active_block_title_style(&theme)))
    } else {
        block
            .border_style(styling::normal_block_border_style(&theme))
            .title(title)
    };

    if state.get_stories().is_loading() {
        frame.render_widget(spinner::widget(state, size.height).block(block), size);
        return;
    }

    if state.get_stories().is_error() {
        let paragraph = Paragraph::new(Span::styled(
            ERROR_MESSAGE,
            styling::error_text_style(&theme),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(paragraph, size);
        return;
    }

    if state.get_stories().stories.is_empty() {
        let paragraph = Paragraph::new(Span::styled(
            EMPTY_MESSAGE,
            styling::muted_text_style(&theme),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(paragraph, size);
        return;
    }

    let rows: Vec<Row> = state
        .get_stories()
        .stories
        .iter()
        .map(|story| {
            Row::new(vec![
                Cell::from(story.title.clone()),
                Cell::from(story.author.clone()),
                Cell::from(story.num_comments.to_string()),
                Cell::from(story.points.to_string()),
                Cell::from(REMOVE_LABEL),
            ])
        })
        .collect();

    let header = Row::new(vec!["Title", "Author", "Comments", "Points", ""])
        .style(styling::muted_text_style(&theme));

    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .style(styling::normal_text_style(&theme))
        .highlight_style(styling::selected_list_item_style(&theme))
        .block(block);

    frame.render_stateful_widget(table, size, state.get_stories_table_state());
}
