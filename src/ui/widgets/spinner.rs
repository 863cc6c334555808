use crate::ui::theme::Theme;
use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Text},
    widgets::Paragraph,
};

pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Return a centered spinner paragraph for the frame index and area height.
///
pub fn widget<'a>(theme: &Theme, index: usize, height: u16) -> Paragraph<'a> {
    let frame = FRAMES[index % FRAMES.len()];
    let padding = (height.saturating_sub(2) / 2) as usize;
    let mut lines: Vec<Line> = vec![Line::from(""); padding];
    lines.push(Line::from(format!("{} Generating...", frame)));
    Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.accent.to_color()))
}
