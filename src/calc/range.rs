use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive start/end pair. Every pair handed out by `clamp` satisfies
/// `start <= end`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DatePair {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DatePair {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DatePair { start, end }
    }

    /// "One month ago -> today".
    pub fn default_for(today: NaiveDate) -> Self {
        DatePair {
            start: add_months(today, -1),
            end: today,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Optional inclusive limits on selectable dates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateBounds {
    pub lower: Option<NaiveDate>,
    pub upper: Option<NaiveDate>,
}

impl DateBounds {
    pub fn new(lower: Option<NaiveDate>, upper: Option<NaiveDate>) -> Self {
        DateBounds { lower, upper }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.lower.is_none_or(|l| date >= l) && self.upper.is_none_or(|u| date <= u)
    }

    /// Shifts `date` to the nearest bound when it falls outside them.
    pub fn clamp_date(&self, date: NaiveDate) -> NaiveDate {
        let mut date = date;
        if let Some(lower) = self.lower {
            date = date.max(lower);
        }
        if let Some(upper) = self.upper {
            date = date.min(upper);
        }
        date
    }
}

/// Which end of the range a chosen date replaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectTarget {
    Start,
    End,
    /// Calendar click: decided by `add_day_to_range`.
    Auto,
}

/// Enforces the bound and ordering invariants on a pair.
///
/// The start is pulled into the bounds first, then the end is raised to the
/// start if it lies before it, and finally the end is pulled into the bounds.
/// Out-of-range dates are moved, never rejected.
pub fn clamp(pair: DatePair, bounds: DateBounds) -> DatePair {
    let start = bounds.clamp_date(pair.start);
    let end = bounds.clamp_date(pair.end.max(start));
    DatePair { start, end }
}

/// Applies a calendar click to a range: a day before the start moves the
/// start, clicking the current end collapses the range onto it, anything
/// else moves the end.
pub fn add_day_to_range(day: NaiveDate, pair: DatePair) -> DatePair {
    if day < pair.start {
        DatePair { start: day, ..pair }
    } else if day == pair.end {
        DatePair { start: day, end: day }
    } else {
        DatePair { end: day, ..pair }
    }
}

/// Replaces one field of `pair`. The result is not clamped.
pub fn select(pair: DatePair, day: NaiveDate, target: SelectTarget) -> DatePair {
    match target {
        SelectTarget::Start => DatePair { start: day, ..pair },
        SelectTarget::End => DatePair { end: day, ..pair },
        SelectTarget::Auto => add_day_to_range(day, pair),
    }
}

/// Builds the initial committed pair from optional caller dates.
pub fn initial_pair(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    bounds: DateBounds,
    today: NaiveDate,
) -> DatePair {
    let defaults = DatePair::default_for(today);
    clamp(
        DatePair {
            start: start.unwrap_or(defaults.start),
            end: end.unwrap_or(defaults.end),
        },
        bounds,
    )
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    match (
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
        NaiveDate::from_ymd_opt(year, month, 1),
    ) {
        (Some(next), Some(first)) => next.signed_duration_since(first).num_days() as u32,
        _ => 31,
    }
}

/// Adds (or subtracts) whole months, clamping the day to the target month's length.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let year = date.year();
    let month = date.month() as i32;
    let new_total = month - 1 + months;
    let new_month = ((new_total % 12 + 12) % 12 + 1) as u32;
    let year_delta = new_total.div_euclid(12);
    let new_year = year + year_delta;
    let max_day = days_in_month(new_year, new_month);
    let new_day = date.day().min(max_day);
    NaiveDate::from_ymd_opt(new_year, new_month, new_day).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn pair(s: NaiveDate, e: NaiveDate) -> DatePair {
        DatePair::new(s, e)
    }

    #[test]
    fn test_default_pair_is_one_month_back() {
        let p = DatePair::default_for(d(2018, 6, 1));
        assert_eq!(p, pair(d(2018, 5, 1), d(2018, 6, 1)));
    }

    #[test]
    fn test_default_pair_clamps_month_end() {
        let p = DatePair::default_for(d(2018, 3, 31));
        assert_eq!(p.start, d(2018, 2, 28));
    }

    #[test]
    fn test_clamp_without_bounds_keeps_ordered_pair() {
        let p = pair(d(2018, 4, 1), d(2018, 4, 29));
        assert_eq!(clamp(p, DateBounds::default()), p);
    }

    #[test]
    fn test_clamp_raises_end_to_start() {
        let p = clamp(pair(d(2018, 7, 1), d(2018, 6, 1)), DateBounds::default());
        assert_eq!(p, pair(d(2018, 7, 1), d(2018, 7, 1)));
    }

    #[test]
    fn test_clamp_lower_bound_moves_both() {
        let bounds = DateBounds::new(Some(d(2018, 6, 1)), None);
        let p = clamp(pair(d(2018, 5, 1), d(2018, 5, 1)), bounds);
        assert_eq!(p, pair(d(2018, 6, 1), d(2018, 6, 1)));
    }

    #[test]
    fn test_clamp_upper_bound_moves_end_only() {
        let bounds = DateBounds::new(None, Some(d(2018, 6, 1)));
        let p = clamp(pair(d(2018, 5, 1), d(2018, 7, 1)), bounds);
        assert_eq!(p, pair(d(2018, 5, 1), d(2018, 6, 1)));
    }

    #[test]
    fn test_clamp_start_past_upper_collapses_to_upper() {
        let bounds = DateBounds::new(None, Some(d(2018, 6, 1)));
        let p = clamp(pair(d(2018, 6, 4), d(2018, 6, 1)), bounds);
        assert_eq!(p, pair(d(2018, 6, 1), d(2018, 6, 1)));
    }

    #[test]
    fn test_clamp_does_not_mutate_input() {
        let original = pair(d(2018, 7, 1), d(2018, 6, 1));
        let copy = original;
        let _ = clamp(original, DateBounds::new(Some(d(2018, 6, 15)), None));
        assert_eq!(original, copy);
    }

    #[test]
    fn test_clamp_is_idempotent_and_ordered_over_grid() {
        let bounds_options = [
            DateBounds::default(),
            DateBounds::new(Some(d(2018, 3, 10)), None),
            DateBounds::new(None, Some(d(2018, 3, 20))),
            DateBounds::new(Some(d(2018, 3, 10)), Some(d(2018, 3, 20))),
            // inverted bounds still produce an ordered pair
            DateBounds::new(Some(d(2018, 3, 20)), Some(d(2018, 3, 10))),
        ];
        for bounds in bounds_options {
            for s in 1..=31 {
                for e in (1..=31).step_by(3) {
                    let once = clamp(pair(d(2018, 3, s), d(2018, 3, e)), bounds);
                    assert!(once.start <= once.end, "{once:?} with {bounds:?}");
                    assert_eq!(clamp(once, bounds), once);
                }
            }
        }
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = DateBounds::new(Some(d(2018, 6, 1)), Some(d(2018, 6, 30)));
        assert!(bounds.contains(d(2018, 6, 1)));
        assert!(bounds.contains(d(2018, 6, 30)));
        assert!(!bounds.contains(d(2018, 5, 31)));
        assert!(!bounds.contains(d(2018, 7, 1)));
        assert!(DateBounds::default().contains(d(1999, 1, 1)));
    }

    #[test]
    fn test_add_day_before_start_moves_start() {
        let p = add_day_to_range(d(2018, 4, 1), pair(d(2018, 5, 1), d(2018, 6, 1)));
        assert_eq!(p, pair(d(2018, 4, 1), d(2018, 6, 1)));
    }

    #[test]
    fn test_add_day_after_start_moves_end() {
        let p = add_day_to_range(d(2018, 4, 29), pair(d(2018, 4, 1), d(2018, 6, 1)));
        assert_eq!(p, pair(d(2018, 4, 1), d(2018, 4, 29)));
    }

    #[test]
    fn test_add_day_on_end_collapses_range() {
        let p = add_day_to_range(d(2018, 6, 1), pair(d(2018, 5, 1), d(2018, 6, 1)));
        assert_eq!(p, pair(d(2018, 6, 1), d(2018, 6, 1)));
    }

    #[test]
    fn test_select_explicit_targets() {
        let p = pair(d(2018, 5, 1), d(2018, 6, 1));
        assert_eq!(select(p, d(2018, 5, 10), SelectTarget::Start).start, d(2018, 5, 10));
        assert_eq!(select(p, d(2018, 5, 20), SelectTarget::End).end, d(2018, 5, 20));
    }

    #[test]
    fn test_initial_pair_uses_defaults() {
        let p = initial_pair(None, None, DateBounds::default(), d(2018, 6, 1));
        assert_eq!(p, pair(d(2018, 5, 1), d(2018, 6, 1)));
    }

    #[test]
    fn test_initial_pair_end_only_with_upper_bound() {
        let bounds = DateBounds::new(None, Some(d(2018, 6, 1)));
        let p = initial_pair(None, Some(d(2018, 7, 1)), bounds, d(2018, 6, 1));
        assert_eq!(p, pair(d(2018, 5, 1), d(2018, 6, 1)));
    }

    #[test]
    fn test_add_months_across_year() {
        assert_eq!(add_months(d(2025, 11, 15), 3), d(2026, 2, 15));
        assert_eq!(add_months(d(2025, 1, 15), -2), d(2024, 11, 15));
    }

    #[test]
    fn test_days_in_month_february_leap() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2025, 12), 31);
    }
}
