use chrono::Month;
use derive_more::Display;

use crate::calendar::{first_weekday_of, weekday_index, Today};

/// Focus over the weekday legend. Either axis may be set on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hover {
    pub row: Option<usize>,
    pub col: Option<usize>,
}

impl Hover {
    pub fn none() -> Self {
        Hover::default()
    }

    pub fn at(row: usize, col: usize) -> Self {
        Hover {
            row: Some(row),
            col: Some(col),
        }
    }

    pub fn is_active(&self) -> bool {
        self.row.is_some() || self.col.is_some()
    }
}

/// Legend cell (row, column) of the current date: the column of the month it
/// belongs to and the row of its day in the date grid.
pub fn current_cell(today: &Today) -> (usize, usize) {
    let col = weekday_index(first_weekday_of(today.year, today.month));
    let row = ((today.day as usize).saturating_sub(1)) % 7;
    (row, col)
}

pub fn is_highlighted(
    row: usize,
    col: usize,
    hover: &Hover,
    today: &Today,
    displayed_year: i64,
) -> bool {
    if hover.is_active() {
        return hover.row == Some(row) || hover.col == Some(col);
    }

    if displayed_year == today.year {
        return current_cell(today) == (row, col);
    }

    false
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DateClass {
    #[display(fmt = "past")]
    Past,
    #[display(fmt = "today")]
    Today,
    #[display(fmt = "future")]
    Future,
}

/// The date grid shows day numbers only, so "today" and "past" are relative to
/// the current month whenever the current year is displayed.
pub fn classify_date(day: u32, today: &Today, displayed_year: i64) -> DateClass {
    if displayed_year != today.year {
        DateClass::Future
    } else if day == today.day {
        DateClass::Today
    } else if day < today.day {
        DateClass::Past
    } else {
        DateClass::Future
    }
}

pub fn is_current_month(month: Month, today: &Today, displayed_year: i64) -> bool {
    displayed_year == today.year && month == today.month
}
