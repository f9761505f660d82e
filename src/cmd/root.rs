use crate::calc::DatePair;
use crate::data::AppSettings;
use crate::ui::app::{run_app, App};
use crate::ui::date_range::{DateRange, DateRangeProps};
use crate::ui::{restore_terminal, setup_terminal};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::cell::RefCell;
use std::rc::Rc;

/// Caller-supplied dates for the picker.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct PickArgs {
    /// Initial start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<NaiveDate>,
    /// Initial end date (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<NaiveDate>,
    /// First selectable date (YYYY-MM-DD)
    #[arg(long)]
    pub first: Option<NaiveDate>,
    /// Last selectable date (YYYY-MM-DD)
    #[arg(long)]
    pub last: Option<NaiveDate>,
    /// Print applied ranges as JSON lines
    #[arg(long)]
    pub json: bool,
}

pub(crate) fn build_props(args: &PickArgs, settings: &AppSettings) -> DateRangeProps {
    DateRangeProps {
        selected_start: args.start,
        selected_end: args.end,
        first_selectable: args.first,
        last_selectable: args.last,
        ..DateRangeProps::from_settings(settings)
    }
}

pub fn run(args: &PickArgs) -> Result<()> {
    let settings = AppSettings::load()?;
    let props = build_props(args, &settings);

    let commits: Rc<RefCell<Vec<DatePair>>> = Rc::default();
    let sink = commits.clone();
    let today = Local::now().date_naive();
    let range = DateRange::new(props, today)
        .on_date_select(|pair| tracing::debug!(start = %pair.start, end = %pair.end, "draft changed"))
        .on_date_commit(move |pair| sink.borrow_mut().push(pair));
    let mut app = App::new(range);

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        original_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    result?;

    let committed = app.range.committed();
    drop(app);
    write_commits(
        &commits.borrow(),
        committed,
        &settings.date_format,
        args.json,
        &mut std::io::stdout(),
    )
}

/// Prints every applied range, then the final committed range.
pub(crate) fn write_commits<W: std::io::Write>(
    commits: &[DatePair],
    committed: DatePair,
    date_format: &str,
    json: bool,
    out: &mut W,
) -> Result<()> {
    if json {
        for pair in commits {
            writeln!(out, "{}", serde_json::to_string(pair)?)?;
        }
        return Ok(());
    }
    for pair in commits {
        writeln!(
            out,
            "Applied: {} - {}",
            pair.start.format(date_format),
            pair.end.format(date_format)
        )?;
    }
    writeln!(
        out,
        "Range: {} - {}",
        committed.start.format(date_format),
        committed.end.format(date_format)
    )?;
    Ok(())
}
