pub mod app;
pub mod calendar;
pub mod date_range;
pub mod header;
pub mod inputs;
pub mod trigger;

use crate::calc::SelectTarget;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// One of the two text fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputField {
    Start,
    End,
}

impl From<InputField> for SelectTarget {
    fn from(field: InputField) -> Self {
        match field {
            InputField::Start => SelectTarget::Start,
            InputField::End => SelectTarget::End,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderButton {
    Cancel,
    Apply,
}

/// Keyboard focus. Only `Trigger` is reachable while the overlay is closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Trigger,
    Input(InputField),
    Calendar,
    Header(HeaderButton),
}

impl Focus {
    /// Tab order inside the open overlay.
    const RING: [Focus; 5] = [
        Focus::Input(InputField::Start),
        Focus::Input(InputField::End),
        Focus::Calendar,
        Focus::Header(HeaderButton::Cancel),
        Focus::Header(HeaderButton::Apply),
    ];

    pub fn next(self) -> Focus {
        let idx = Self::RING.iter().position(|f| *f == self);
        match idx {
            Some(i) => Self::RING[(i + 1) % Self::RING.len()],
            None => Self::RING[0],
        }
    }

    pub fn prev(self) -> Focus {
        let idx = Self::RING.iter().position(|f| *f == self);
        match idx {
            Some(i) => Self::RING[(i + Self::RING.len() - 1) % Self::RING.len()],
            None => Self::RING[Self::RING.len() - 1],
        }
    }
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

pub fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
