use crate::calc::range::{add_months, days_in_month};
use crate::calc::DatePair;
use chrono::{Datelike, Duration, NaiveDate};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

// Fixed-width month column: 7 days x 3 chars.
pub(crate) const MONTH_WIDTH: u16 = 21;
pub(crate) const GAP_WIDTH: u16 = 3;

// Range fill behind in-between days
const RANGE_BG: Color = Color::Rgb(40, 60, 90);

/// A rule that makes days unselectable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisabledDays {
    Before(NaiveDate),
    After(NaiveDate),
}

impl DisabledDays {
    pub fn matches(&self, date: NaiveDate) -> bool {
        match *self {
            DisabledDays::Before(limit) => date < limit,
            DisabledDays::After(limit) => date > limit,
        }
    }
}

/// Everything the grid needs to draw itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarProps {
    pub show_outside_days: bool,
    /// Earliest month that can be navigated to.
    pub from_month: Option<NaiveDate>,
    /// Latest month that can be navigated to.
    pub to_month: Option<NaiveDate>,
    pub selected: DatePair,
    pub initial_month: NaiveDate,
    pub number_of_months: u8,
    pub disabled_days: Vec<DisabledDays>,
    /// Keyboard cursor; drives which months are shown.
    pub cursor: NaiveDate,
    pub today: NaiveDate,
}

impl CalendarProps {
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        self.disabled_days.iter().any(|rule| rule.matches(date))
    }

    /// First day of each month to draw. The view opens on `initial_month`
    /// and follows the cursor once it leaves those months; with two months
    /// the pair is shifted back when the second would pass `to_month`.
    pub fn visible_months(&self) -> Vec<NaiveDate> {
        let count = self.number_of_months.max(1) as i32;
        let anchor = first_of_month(self.initial_month);
        let cursor_month = first_of_month(self.cursor);
        let first = if cursor_month < anchor || cursor_month > add_months(anchor, count - 1) {
            cursor_month
        } else {
            anchor
        };
        let mut lead = first;
        if count > 1 {
            if let Some(limit) = self.to_month.map(first_of_month) {
                let last = add_months(first, count - 1);
                if last > limit {
                    lead = add_months(limit, -(count - 1));
                }
            }
            if let Some(floor) = self.from_month.map(first_of_month) {
                lead = lead.max(floor);
            }
        }
        (0..count).map(|i| add_months(lead, i)).collect()
    }
}

pub(crate) fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub(crate) fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// Determines the ratatui `Style` for a calendar day cell based on its state.
pub(crate) fn calendar_day_style(
    is_cursor: bool,
    is_range_edge: bool,
    in_range: bool,
    is_disabled: bool,
    is_today: bool,
) -> Style {
    if is_cursor {
        Style::default()
            .fg(Color::Black)
            .bg(if is_disabled { Color::DarkGray } else { Color::White })
            .add_modifier(Modifier::BOLD)
    } else if is_disabled {
        Style::default().add_modifier(Modifier::DIM | Modifier::CROSSED_OUT)
    } else if is_range_edge {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if in_range {
        Style::default().bg(RANGE_BG)
    } else if is_today {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    }
}

/// Lines for one month: title, weekday header, up to six week rows.
pub(crate) fn month_lines(props: &CalendarProps, month_start: NaiveDate) -> Vec<Line<'static>> {
    let year = month_start.year();
    let month = month_start.month();
    let title = format!("{} {}", month_name(month), year);
    let total_days = days_in_month(year, month);
    let start_dow = month_start.weekday().num_days_from_sunday() as usize;

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            format!("{:^21}", title),
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
        Line::from("Su Mo Tu We Th Fr Sa"),
    ];

    let rows = (start_dow + total_days as usize).div_ceil(7);
    for row in 0..rows {
        let mut spans = Vec::new();
        for col in 0..7usize {
            let offset = (row * 7 + col) as i64 - start_dow as i64;
            let Some(date) = month_start.checked_add_signed(Duration::days(offset)) else {
                spans.push(Span::raw("   "));
                continue;
            };
            if date.month() != month {
                if props.show_outside_days {
                    let style = Style::default().add_modifier(Modifier::DIM);
                    spans.push(Span::styled(format!("{:2} ", date.day()), style));
                } else {
                    spans.push(Span::raw("   "));
                }
                continue;
            }
            let style = calendar_day_style(
                date == props.cursor,
                date == props.selected.start || date == props.selected.end,
                props.selected.contains(date),
                props.is_disabled(date),
                date == props.today,
            );
            spans.push(Span::styled(format!("{:2}", date.day()), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }
    lines
}

pub fn render_calendar(f: &mut Frame, area: Rect, props: &CalendarProps) {
    let months = props.visible_months();
    let mut constraints = Vec::new();
    for i in 0..months.len() {
        if i > 0 {
            constraints.push(Constraint::Length(GAP_WIDTH));
        }
        constraints.push(Constraint::Length(MONTH_WIDTH));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, month_start) in months.iter().enumerate() {
        let widget = Paragraph::new(month_lines(props, *month_start))
            .block(Block::default().borders(Borders::NONE));
        f.render_widget(widget, chunks[i * 2]);
    }
}
