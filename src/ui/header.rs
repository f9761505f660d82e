use crate::ui::HeaderButton;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Props for the Apply / Cancel bar at the top of the overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderProps {
    pub focused: Option<HeaderButton>,
}

fn button(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    Span::styled(format!("[ {label} ]"), style)
}

pub fn render_header(f: &mut Frame, area: Rect, props: &HeaderProps) {
    let line = Line::from(vec![
        Span::styled("Select a date range  ", Style::default().add_modifier(Modifier::BOLD)),
        button("Cancel", props.focused == Some(HeaderButton::Cancel)),
        Span::raw(" "),
        button("Apply", props.focused == Some(HeaderButton::Apply)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
