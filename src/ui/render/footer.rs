use super::widgets::styling;
use super::Frame;
use crate::state::State;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

const KEY_HINTS: &str =
    " Tab: next field  ←/→: country  Enter: generate  PgUp/PgDn: switch  Ctrl-N: mount  Ctrl-X: unmount  Esc: quit";

/// Render footer with key hints and the active widget position.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let position = match state.widgets().len() {
        0 => " no widgets ".to_string(),
        count => format!(" widget {}/{} ", state.active_widget_index() + 1, count),
    };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(position.chars().count() as u16),
            Constraint::Min(0),
        ])
        .split(size);

    let badge_style = if state.active_widget().map_or(false, |w| w.is_loading()) {
        Style::default()
            .fg(theme.highlight_fg.to_color())
            .bg(theme.warning.to_color())
    } else {
        Style::default()
            .fg(theme.highlight_fg.to_color())
            .bg(theme.highlight_bg.to_color())
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(position, badge_style))),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(KEY_HINTS).style(styling::muted_text_style(theme)),
        chunks[1],
    );
}
