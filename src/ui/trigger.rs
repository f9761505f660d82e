use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Props for the button that shows the committed range and opens the overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerProps {
    pub start_date_text: String,
    pub end_date_text: String,
    pub trigger_text: String,
    pub is_compact: bool,
    pub is_open: bool,
    pub is_focused: bool,
}

pub fn trigger_text(start_date_text: &str, end_date_text: &str) -> String {
    format!("{start_date_text} - {end_date_text}")
}

pub fn render_trigger(f: &mut Frame, area: Rect, props: &TriggerProps) {
    let arrow = if props.is_open { "▴" } else { "▾" };
    let style = if props.is_focused {
        Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let line = Line::from(vec![
        Span::styled(format!(" {} ", props.trigger_text), style),
        Span::raw(format!(" {arrow}")),
    ]);

    let widget = if props.is_compact {
        Paragraph::new(line)
    } else {
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Date range"))
    };
    f.render_widget(widget, area);
}
