use crate::ui::InputField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Props for the From/To text fields. Values are the raw text mirror, which
/// may hold a half-typed date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputsProps {
    pub start_date_value: String,
    pub end_date_value: String,
    pub focused: Option<InputField>,
    /// Shown when a field is empty.
    pub placeholder: String,
}

fn field_widget<'a>(title: &'a str, value: &'a str, placeholder: &'a str, focused: bool) -> Paragraph<'a> {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut spans = if value.is_empty() {
        vec![Span::styled(placeholder, Style::default().fg(Color::DarkGray))]
    } else {
        vec![Span::raw(value)]
    };
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
    }
    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title),
    )
}

pub fn render_inputs(f: &mut Frame, area: Rect, props: &InputsProps) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    f.render_widget(
        field_widget(
            "From",
            &props.start_date_value,
            &props.placeholder,
            props.focused == Some(InputField::Start),
        ),
        chunks[0],
    );
    f.render_widget(
        field_widget(
            "To",
            &props.end_date_value,
            &props.placeholder,
            props.focused == Some(InputField::End),
        ),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(props: &InputsProps) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_inputs(f, area, props);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_render_both_values() {
        let out = draw(&InputsProps {
            start_date_value: "04/20/2018".to_string(),
            end_date_value: "05/28/2018".to_string(),
            focused: None,
            placeholder: "mm/dd/yyyy".to_string(),
        });
        assert!(out.contains("From"));
        assert!(out.contains("04/20/2018"));
        assert!(out.contains("05/28/2018"));
    }

    #[test]
    fn test_render_placeholder_for_empty_value() {
        let out = draw(&InputsProps {
            start_date_value: String::new(),
            end_date_value: "05/28/2018".to_string(),
            focused: Some(InputField::Start),
            placeholder: "mm/dd/yyyy".to_string(),
        });
        assert!(out.contains("mm/dd/yyyy"));
    }
}
