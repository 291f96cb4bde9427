use super::{footer, header, log, search, stories, Frame};
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

const LOG_HEIGHT: u16 = 8;

/// Render the whole screen according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let log_height = if state.is_log_visible() { LOG_HEIGHT } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(log_height),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(frame.size());

    header(frame, rows[0], state);
    search(frame, rows[1], state);
    stories(frame, rows[2], state);
    if state.is_log_visible() {
        log(frame, rows[3], state);
    }
    footer(frame, rows[4], state);
}
