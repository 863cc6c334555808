use super::widgets::{spinner, styling};
use super::Frame;
use crate::catalog;
use crate::state::{Field, FormState, State};
use crate::ui::view::ResultView;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

const FORM_HEADING: &str = "Choose a country";
const IDLE_HINT: &str = "Pick a country and a quantity, then press Enter.";

/// Render one widget instance according to its form state.
///
pub fn widget(frame: &mut Frame, size: Rect, state: &State, form: &FormState, active: bool) {
    let theme = state.get_theme();
    let view = ResultView::of(form);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let title = format!("Address Generator #{}", form.id());
    block = if active {
        block
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled(title, styling::active_block_title_style()))
    } else {
        block.title(title)
    };
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let alert_height = if view.alert().is_some() { 2 } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Heading
            Constraint::Length(3),            // Country
            Constraint::Length(3),            // Quantity
            Constraint::Length(alert_height), // Alert
            Constraint::Length(1),            // Generate
            Constraint::Min(0),               // Results
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(FORM_HEADING).style(styling::heading_style(theme)),
        rows[0],
    );
    country_field(frame, rows[1], state, form, active);
    quantity_field(frame, rows[2], state, form, active, view.alert().is_some());
    if let Some(message) = view.alert() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("alert: {}", message),
                styling::alert_style(theme),
            )))
            .wrap(Wrap { trim: true }),
            rows[3],
        );
    }
    generate_button(frame, rows[4], state, form, active);
    results(frame, rows[5], state, &view);
}

fn field_block<'a>(state: &State, title: String, focused: bool) -> Block<'a> {
    let theme = state.get_theme();
    let border_style = if focused {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border_style)
}

fn value_style(state: &State, focused: bool) -> ratatui::style::Style {
    if focused {
        styling::focused_field_style(state.get_theme())
    } else {
        styling::normal_text_style(state.get_theme())
    }
}

fn country_field(frame: &mut Frame, size: Rect, state: &State, form: &FormState, active: bool) {
    let focused = active && form.focus() == Field::Country;
    let name = catalog::country_name(form.country());
    let text = if focused {
        format!("< {} ({}) >", name, form.country())
    } else {
        format!("{} ({})", name, form.country())
    };
    frame.render_widget(
        Paragraph::new(text)
            .style(value_style(state, focused))
            .block(field_block(state, "Country".to_string(), focused)),
        size,
    );
}

/// The field title points at the alert below it while one is shown.
///
fn quantity_field(
    frame: &mut Frame,
    size: Rect,
    state: &State,
    form: &FormState,
    active: bool,
    has_alert: bool,
) {
    let focused = active && form.focus() == Field::Quantity;
    let title = if has_alert {
        "Quantity (see alert)".to_string()
    } else {
        "Quantity".to_string()
    };
    let text = if focused {
        format!("{}_", form.quantity_input())
    } else {
        form.quantity_input().to_string()
    };
    frame.render_widget(
        Paragraph::new(text)
            .style(value_style(state, focused))
            .block(field_block(state, title, focused)),
        size,
    );
}

fn generate_button(frame: &mut Frame, size: Rect, state: &State, form: &FormState, active: bool) {
    let focused = active && form.focus() == Field::Generate;
    let label = if form.is_loading() {
        "[ GENERATING ]"
    } else {
        "[ GENERATE ]"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            label,
            styling::button_style(state.get_theme(), focused, form.is_loading()),
        ))
        .alignment(Alignment::Center),
        size,
    );
}

fn results(frame: &mut Frame, size: Rect, state: &State, view: &ResultView) {
    let theme = state.get_theme();
    let title = if view.is_busy() {
        "Results [busy]"
    } else {
        "Results"
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(styling::normal_block_border_style(theme));

    match view {
        ResultView::Busy => {
            frame.render_widget(
                spinner::widget(theme, state.get_spinner_index(), size.height).block(block),
                size,
            );
        }
        ResultView::Listing { heading, entries } => {
            let mut items = vec![ListItem::new(Line::from(Span::styled(
                heading.clone(),
                styling::heading_style(theme),
            )))];
            items.extend(entries.iter().map(|e| ListItem::new(e.clone())));
            frame.render_widget(
                List::new(items)
                    .style(styling::normal_text_style(theme))
                    .block(block),
                size,
            );
        }
        ResultView::Idle => {
            frame.render_widget(
                Paragraph::new(IDLE_HINT)
                    .style(styling::muted_text_style(theme))
                    .wrap(Wrap { trim: true })
                    .block(block),
                size,
            );
        }
        ResultView::Alert { .. } => frame.render_widget(block, size),
    }
}
