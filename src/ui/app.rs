use crate::calc::range::add_months;
use crate::calc::SelectTarget;
use crate::ui::date_range::DateRange;
use crate::ui::{Focus, HeaderButton, InputField};
use anyhow::Result;
use chrono::{Duration, NaiveDate};
use crossterm::event::{self, Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io::Stdout;
use std::time::Duration as StdDuration;

/// Hosts a `DateRange` in the terminal and routes keys to it.
pub struct App {
    pub range: DateRange,
    focus: Focus,
    /// Day highlighted in the calendar grid.
    cursor: NaiveDate,
}

impl App {
    pub fn new(range: DateRange) -> Self {
        let cursor = range.draft().start;
        App {
            range,
            focus: Focus::Trigger,
            cursor,
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    fn open(&mut self) {
        self.range.toggle_popover();
        self.cursor = self.range.draft().start;
        self.focus = Focus::Calendar;
    }

    /// Leaving a text field parses whatever it holds.
    fn blur_current(&mut self) {
        if let Focus::Input(field) = self.focus {
            let text = self.range.text_input(field).to_string();
            self.range.handle_input_blur(&text, field);
        }
    }

    fn move_focus(&mut self, next: Focus) {
        self.blur_current();
        self.focus = next;
    }

    fn set_cursor(&mut self, date: NaiveDate) {
        self.cursor = self.range.props().bounds().clamp_date(date);
    }

    /// Moves the cursor by `days`; it stays put past the calendar's range.
    fn shift_cursor(&mut self, days: i64) {
        if let Some(date) = self.cursor.checked_add_signed(Duration::days(days)) {
            self.set_cursor(date);
        }
    }

    fn select_at_cursor(&mut self, target: SelectTarget) {
        if self.range.props().bounds().contains(self.cursor) {
            self.range.on_select_date(self.cursor, target);
        }
    }

    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if !self.range.is_open() {
            return match code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.open();
                    false
                }
                KeyCode::Char('q') | KeyCode::Esc => true,
                _ => false,
            };
        }

        match code {
            KeyCode::Esc => {
                self.range.revert_dates();
                self.focus = Focus::Trigger;
                return false;
            }
            KeyCode::Tab => {
                self.move_focus(self.focus.next());
                return false;
            }
            KeyCode::BackTab => {
                self.move_focus(self.focus.prev());
                return false;
            }
            _ => {}
        }

        match self.focus {
            Focus::Input(field) => self.handle_input_key(code, field),
            Focus::Calendar => self.handle_calendar_key(code),
            Focus::Header(button) => {
                if matches!(code, KeyCode::Enter | KeyCode::Char(' ')) {
                    match button {
                        HeaderButton::Apply => self.range.commit_dates(),
                        HeaderButton::Cancel => self.range.revert_dates(),
                    }
                    self.focus = Focus::Trigger;
                }
            }
            Focus::Trigger => {
                if matches!(code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.range.toggle_popover();
                }
            }
        }
        false
    }

    fn handle_input_key(&mut self, code: KeyCode, field: InputField) {
        let mut text = self.range.text_input(field).to_string();
        match code {
            KeyCode::Char(c) => {
                text.push(c);
                self.range.handle_input_change(&text, field);
            }
            KeyCode::Backspace => {
                text.pop();
                self.range.handle_input_change(&text, field);
            }
            KeyCode::Enter => {
                self.range.handle_input_blur(&text, field);
                self.cursor = match field {
                    InputField::Start => self.range.draft().start,
                    InputField::End => self.range.draft().end,
                };
            }
            _ => {}
        }
    }

    fn handle_calendar_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => self.shift_cursor(-1),
            KeyCode::Right => self.shift_cursor(1),
            KeyCode::Up => self.shift_cursor(-7),
            KeyCode::Down => self.shift_cursor(7),
            KeyCode::PageUp => self.set_cursor(add_months(self.cursor, -1)),
            KeyCode::PageDown => self.set_cursor(add_months(self.cursor, 1)),
            KeyCode::Enter | KeyCode::Char(' ') => self.select_at_cursor(SelectTarget::Auto),
            KeyCode::Char('s') => self.select_at_cursor(SelectTarget::Start),
            KeyCode::Char('e') => self.select_at_cursor(SelectTarget::End),
            _ => {}
        }
    }

    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(f.area());

        self.range.render(f, chunks[0], self.focus, self.cursor);

        let help = if self.range.is_open() {
            "Tab: next field  arrows/PgUp/PgDn: move  Enter: select  s/e: set start/end  Esc: cancel"
        } else {
            "Enter: open  q: quit"
        };
        f.render_widget(
            Paragraph::new(Line::from(help)).style(Style::default().fg(Color::DarkGray)),
            chunks[1],
        );
    }
}

// ── App event loop ────────────────────────────────────────────────────────────

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;
        if event::poll(StdDuration::from_millis(16))? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key.code, key.modifiers) {
                    break;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::DatePair;
    use crate::ui::date_range::DateRangeProps;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn make_app() -> App {
        App::new(DateRange::new(DateRangeProps::default(), d(2018, 6, 1)))
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(code, KeyModifiers::empty())
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_enter_opens_overlay_on_calendar() {
        let mut app = make_app();
        assert!(!press(&mut app, KeyCode::Enter));
        assert!(app.range.is_open());
        assert_eq!(app.focus(), Focus::Calendar);
        assert_eq!(app.cursor(), d(2018, 5, 1));
    }

    #[test]
    fn test_q_quits_when_closed() {
        let mut app = make_app();
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_ctrl_c_quits_when_open() {
        let mut app = make_app();
        press(&mut app, KeyCode::Enter);
        assert!(app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_arrow_keys_move_cursor() {
        let mut app = make_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.cursor(), d(2018, 5, 2));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor(), d(2018, 5, 9));
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.cursor(), d(2018, 5, 1));
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.cursor(), d(2018, 6, 1));
    }

    #[test]
    fn test_cursor_stays_within_bounds() {
        let props = DateRangeProps {
            first_selectable: Some(d(2018, 5, 1)),
            ..DateRangeProps::default()
        };
        let mut app = App::new(DateRange::new(props, d(2018, 6, 1)));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.cursor(), d(2018, 5, 1));
    }

    #[test]
    fn test_calendar_selection_then_apply() {
        let commits: Rc<RefCell<Vec<DatePair>>> = Rc::default();
        let sink = commits.clone();
        let range = DateRange::new(DateRangeProps::default(), d(2018, 6, 1))
            .on_date_commit(move |p| sink.borrow_mut().push(p));
        let mut app = App::new(range);

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.range.draft(), DatePair::new(d(2018, 5, 2), d(2018, 5, 9)));
        assert_eq!(app.range.committed(), DatePair::new(d(2018, 5, 1), d(2018, 6, 1)));

        // Calendar -> Cancel -> Apply
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), Focus::Header(HeaderButton::Apply));
        press(&mut app, KeyCode::Enter);

        assert!(!app.range.is_open());
        assert_eq!(app.focus(), Focus::Trigger);
        assert_eq!(*commits.borrow(), vec![DatePair::new(d(2018, 5, 2), d(2018, 5, 9))]);
    }

    #[test]
    fn test_esc_cancels_draft() {
        let mut app = make_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('s'));
        assert!(!press(&mut app, KeyCode::Esc));
        assert!(!app.range.is_open());
        assert_eq!(app.range.draft(), app.range.committed());
    }

    #[test]
    fn test_typing_only_changes_text_until_blur() {
        let mut app = make_app();
        press(&mut app, KeyCode::Enter);
        // Calendar -> Start input via BackTab twice
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus(), Focus::Input(InputField::Start));

        for _ in 0..10 {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "04/20/2018");
        assert_eq!(app.range.text_input(InputField::Start), "04/20/2018");
        assert_eq!(app.range.draft().start, d(2018, 5, 1));

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.range.draft().start, d(2018, 4, 20));
    }

    #[test]
    fn test_invalid_text_is_ignored_on_blur() {
        let mut app = make_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::BackTab);
        type_text(&mut app, "xx");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.range.draft().end, d(2018, 6, 1));
        assert_eq!(app.range.text_input(InputField::End), "06/01/2018xx");
    }

    #[test]
    fn test_out_of_range_year_is_ignored_and_renders() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut app = make_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus(), Focus::Input(InputField::End));
        for _ in 0..10 {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "12/31/+262142");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.range.draft(), DatePair::new(d(2018, 5, 1), d(2018, 6, 1)));

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
    }

    #[test]
    fn test_reopen_after_cancel() {
        let mut app = make_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus(), Focus::Trigger);
        press(&mut app, KeyCode::Enter);
        assert!(app.range.is_open());
    }
}
