use super::widgets::styling;
use super::{footer, log, widget, Frame};
use crate::state::State;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

const LOG_HEIGHT: u16 = 8;
const EMPTY_HINT: &str = "No widget mounted. Press Ctrl-N to mount one.";

/// Render the whole screen: widget panes, log panel and footer.
///
pub fn all(frame: &mut Frame, state: &State) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(12),
            Constraint::Length(LOG_HEIGHT),
            Constraint::Length(1),
        ])
        .split(frame.size());

    panes(frame, rows[0], state);
    log(frame, rows[1], state);
    footer(frame, rows[2], state);
}

/// Split the area evenly between the mounted widgets.
///
fn panes(frame: &mut Frame, size: Rect, state: &State) {
    let widgets = state.widgets();
    if widgets.is_empty() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(state.get_theme()));
        frame.render_widget(
            Paragraph::new(EMPTY_HINT)
                .alignment(Alignment::Center)
                .style(styling::muted_text_style(state.get_theme()))
                .block(block),
            size,
        );
        return;
    }

    let count = widgets.len() as u32;
    let constraints: Vec<Constraint> = widgets
        .iter()
        .map(|_| Constraint::Ratio(1, count))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(size);

    for (i, form) in widgets.iter().enumerate() {
        widget(
            frame,
            columns[i],
            state,
            form,
            i == state.active_widget_index(),
        );
    }
}
