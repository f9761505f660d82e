//! The date-range picker component.
//!
//! `DateRange` holds two pairs: the committed pair, which the owner sees and
//! the trigger label shows, and the draft pair, which the overlay edits.
//! Every mutation goes through `clamp`, so both pairs always satisfy the
//! bounds and `start <= end`. The draft only reaches the committed pair
//! through `commit_dates`.

use crate::calc::range::{clamp, initial_pair, select};
use crate::calc::{DateBounds, DatePair, SelectTarget};
use crate::data::AppSettings;
use crate::ui::calendar::{render_calendar, CalendarProps, DisabledDays, GAP_WIDTH, MONTH_WIDTH};
use crate::ui::header::{render_header, HeaderProps};
use crate::ui::inputs::{render_inputs, InputsProps};
use crate::ui::trigger::{render_trigger, trigger_text, TriggerProps};
use crate::ui::{Focus, InputField};
use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Clear},
    Frame,
};
use std::fmt::Write;

pub type DateCallback = Box<dyn FnMut(DatePair)>;
pub type RenderOverride<P> = Box<dyn Fn(&mut Frame, Rect, &P)>;

const TRIGGER_HEIGHT: u16 = 3;
// header + inputs + 8-line month + borders
const OVERLAY_HEIGHT: u16 = 1 + 3 + 8 + 2;
const OVERLAY_MIN_WIDTH: u16 = 32;
const INPUT_YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

/// Caller-controlled configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateRangeProps {
    pub selected_start: Option<NaiveDate>,
    pub selected_end: Option<NaiveDate>,
    pub first_selectable: Option<NaiveDate>,
    pub last_selectable: Option<NaiveDate>,
    pub is_compact: bool,
    pub date_format: String,
    /// Widths above this draw two months side by side.
    pub wide_threshold: u16,
}

impl Default for DateRangeProps {
    fn default() -> Self {
        DateRangeProps::from_settings(&AppSettings::default())
    }
}

impl DateRangeProps {
    pub fn from_settings(settings: &AppSettings) -> Self {
        DateRangeProps {
            selected_start: None,
            selected_end: None,
            first_selectable: None,
            last_selectable: None,
            is_compact: settings.compact,
            date_format: settings.date_format.clone(),
            wide_threshold: settings.wide_threshold,
        }
    }

    pub fn bounds(&self) -> DateBounds {
        DateBounds::new(self.first_selectable, self.last_selectable)
    }
}

pub struct DateRange {
    props: DateRangeProps,
    today: NaiveDate,
    committed: DatePair,
    draft: DatePair,
    text_input_start: String,
    text_input_end: String,
    popover_open: bool,
    on_date_select: Option<DateCallback>,
    on_date_commit: Option<DateCallback>,
    render_trigger: Option<RenderOverride<TriggerProps>>,
    render_header: Option<RenderOverride<HeaderProps>>,
    render_inputs: Option<RenderOverride<InputsProps>>,
}

impl DateRange {
    pub fn new(props: DateRangeProps, today: NaiveDate) -> Self {
        let committed = initial_pair(
            props.selected_start,
            props.selected_end,
            props.bounds(),
            today,
        );
        let mut range = DateRange {
            props,
            today,
            committed,
            draft: committed,
            text_input_start: String::new(),
            text_input_end: String::new(),
            popover_open: false,
            on_date_select: None,
            on_date_commit: None,
            render_trigger: None,
            render_header: None,
            render_inputs: None,
        };
        range.sync_text_inputs();
        range
    }

    pub fn on_date_select(mut self, callback: impl FnMut(DatePair) + 'static) -> Self {
        self.on_date_select = Some(Box::new(callback));
        self
    }

    pub fn on_date_commit(mut self, callback: impl FnMut(DatePair) + 'static) -> Self {
        self.on_date_commit = Some(Box::new(callback));
        self
    }

    pub fn render_trigger_with(
        mut self,
        render: impl Fn(&mut Frame, Rect, &TriggerProps) + 'static,
    ) -> Self {
        self.render_trigger = Some(Box::new(render));
        self
    }

    pub fn render_header_with(
        mut self,
        render: impl Fn(&mut Frame, Rect, &HeaderProps) + 'static,
    ) -> Self {
        self.render_header = Some(Box::new(render));
        self
    }

    pub fn render_inputs_with(
        mut self,
        render: impl Fn(&mut Frame, Rect, &InputsProps) + 'static,
    ) -> Self {
        self.render_inputs = Some(Box::new(render));
        self
    }

    pub fn committed(&self) -> DatePair {
        self.committed
    }

    pub fn draft(&self) -> DatePair {
        self.draft
    }

    pub fn props(&self) -> &DateRangeProps {
        &self.props
    }

    pub fn is_open(&self) -> bool {
        self.popover_open
    }

    pub fn text_input(&self, field: InputField) -> &str {
        match field {
            InputField::Start => &self.text_input_start,
            InputField::End => &self.text_input_end,
        }
    }

    /// Falls back to ISO 8601 when `date_format` is not a usable pattern.
    pub fn format_date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        match write!(out, "{}", date.format(&self.props.date_format)) {
            Ok(()) => out,
            Err(_) => date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Typed dates outside years 1..=9999 are treated as unparsable.
    fn parse_date(&self, text: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(text.trim(), &self.props.date_format)
            .ok()
            .filter(|date| INPUT_YEARS.contains(&date.year()))
    }

    fn sync_text_inputs(&mut self) {
        self.text_input_start = self.format_date(self.draft.start);
        self.text_input_end = self.format_date(self.draft.end);
    }

    /// Replaces the caller-controlled props. The committed pair is rebuilt
    /// from them and any draft in progress is dropped.
    pub fn set_props(&mut self, props: DateRangeProps) {
        self.props = props;
        self.committed = initial_pair(
            self.props.selected_start,
            self.props.selected_end,
            self.props.bounds(),
            self.today,
        );
        self.draft = self.committed;
        self.sync_text_inputs();
        tracing::debug!(committed = ?self.committed, "props changed, draft reset");
    }

    /// Moves one end of the draft to `date`, re-clamps, and reports the new
    /// draft to the selection callback.
    pub fn on_select_date(&mut self, date: NaiveDate, target: SelectTarget) {
        self.draft = clamp(select(self.draft, date, target), self.props.bounds());
        self.sync_text_inputs();
        tracing::debug!(?date, ?target, draft = ?self.draft, "date selected");
        if let Some(callback) = self.on_date_select.as_mut() {
            callback(self.draft);
        }
    }

    /// Keystroke in a text field: only the raw text changes.
    pub fn handle_input_change(&mut self, text: &str, field: InputField) {
        match field {
            InputField::Start => self.text_input_start = text.to_string(),
            InputField::End => self.text_input_end = text.to_string(),
        }
    }

    /// A text field lost focus. Valid, changed dates are selected; anything
    /// else leaves the draft alone.
    pub fn handle_input_blur(&mut self, text: &str, field: InputField) {
        if text.trim().is_empty() {
            return;
        }
        let Some(date) = self.parse_date(text) else {
            tracing::debug!(text, ?field, "ignoring unparsable date input");
            return;
        };
        let current = match field {
            InputField::Start => self.draft.start,
            InputField::End => self.draft.end,
        };
        if date == current {
            return;
        }
        self.on_select_date(date, field.into());
    }

    /// Apply: the draft becomes the committed pair.
    pub fn commit_dates(&mut self) {
        self.committed = self.draft;
        self.popover_open = false;
        tracing::info!(start = %self.committed.start, end = %self.committed.end, "range applied");
        if let Some(callback) = self.on_date_commit.as_mut() {
            callback(self.committed);
        }
    }

    /// Cancel: the draft is discarded.
    pub fn revert_dates(&mut self) {
        self.draft = self.committed;
        self.sync_text_inputs();
        self.popover_open = false;
    }

    /// Opens the overlay, or closes it as a cancel.
    pub fn toggle_popover(&mut self) {
        if self.popover_open {
            self.revert_dates();
        } else {
            self.popover_open = true;
        }
    }

    pub fn trigger_props(&self, is_focused: bool) -> TriggerProps {
        let start_date_text = self.format_date(self.committed.start);
        let end_date_text = self.format_date(self.committed.end);
        TriggerProps {
            trigger_text: trigger_text(&start_date_text, &end_date_text),
            start_date_text,
            end_date_text,
            is_compact: self.props.is_compact,
            is_open: self.popover_open,
            is_focused,
        }
    }

    pub fn header_props(&self, focus: Focus) -> HeaderProps {
        HeaderProps {
            focused: match focus {
                Focus::Header(button) => Some(button),
                _ => None,
            },
        }
    }

    pub fn inputs_props(&self, focus: Focus) -> InputsProps {
        InputsProps {
            start_date_value: self.text_input_start.clone(),
            end_date_value: self.text_input_end.clone(),
            focused: match focus {
                Focus::Input(field) => Some(field),
                _ => None,
            },
            placeholder: placeholder_for(&self.props.date_format),
        }
    }

    /// Grid props for a drawing area `width` columns wide.
    pub fn calendar_props(&self, width: u16, cursor: NaiveDate) -> CalendarProps {
        let mut disabled_days = Vec::new();
        if let Some(first) = self.props.first_selectable {
            disabled_days.push(DisabledDays::Before(first));
        }
        if let Some(last) = self.props.last_selectable {
            disabled_days.push(DisabledDays::After(last));
        }
        CalendarProps {
            show_outside_days: false,
            from_month: self.props.first_selectable,
            to_month: self.props.last_selectable,
            selected: self.draft,
            initial_month: self.draft.start,
            number_of_months: if width > self.props.wide_threshold { 2 } else { 1 },
            disabled_days,
            cursor,
            today: self.today,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, focus: Focus, cursor: NaiveDate) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(TRIGGER_HEIGHT), Constraint::Min(0)])
            .split(area);

        let trigger = self.trigger_props(focus == Focus::Trigger);
        match &self.render_trigger {
            Some(render) => render(f, chunks[0], &trigger),
            None => render_trigger(f, chunks[0], &trigger),
        }

        if !self.popover_open {
            return;
        }

        let calendar = self.calendar_props(area.width, cursor);
        let months = calendar.number_of_months as u16;
        let calendar_width = months * MONTH_WIDTH + (months - 1) * GAP_WIDTH;
        let overlay = Rect {
            height: chunks[1].height.min(OVERLAY_HEIGHT),
            width: chunks[1].width.min((calendar_width + 2).max(OVERLAY_MIN_WIDTH)),
            ..chunks[1]
        };
        f.render_widget(Clear, overlay);
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(overlay);
        f.render_widget(block, overlay);

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // header
                Constraint::Length(3), // inputs
                Constraint::Min(0),    // calendar
            ])
            .split(inner);

        let header = self.header_props(focus);
        match &self.render_header {
            Some(render) => render(f, parts[0], &header),
            None => render_header(f, parts[0], &header),
        }

        let inputs = self.inputs_props(focus);
        match &self.render_inputs {
            Some(render) => render(f, parts[1], &inputs),
            None => render_inputs(f, parts[1], &inputs),
        }

        render_calendar(f, parts[2], &calendar);
    }
}

/// Human-readable hint for a chrono format string, e.g. `%m/%d/%Y` -> `mm/dd/yyyy`.
pub(crate) fn placeholder_for(format: &str) -> String {
    format
        .replace("%m", "mm")
        .replace("%d", "dd")
        .replace("%Y", "yyyy")
        .replace("%y", "yy")
}
