use chrono::{Datelike, Local, Month, Weekday};
use derive_more::Constructor;

use crate::i18n::Language;

pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Weekdays in column order, index 0 is the first day of the week.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

pub fn month_index(month: Month) -> usize {
    month.number_from_month() as usize - 1
}

pub fn weekday_index(weekday: Weekday) -> usize {
    weekday.num_days_from_sunday() as usize
}

/// Weekday of the first day of `month` in the proleptic Gregorian calendar.
///
/// Any year is accepted. The Gregorian calendar repeats every 400 years
/// (146097 days, an exact number of weeks), so the year is reduced into a
/// single positive cycle before doing the arithmetic.
pub fn first_weekday_of(year: i64, month: Month) -> Weekday {
    const OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

    let m = month_index(month);
    let mut y = year.rem_euclid(400) + 400;
    if m < 2 {
        y -= 1;
    }

    let idx = (y + y / 4 - y / 100 + y / 400 + OFFSETS[m] + 1) % 7;
    WEEKDAYS[idx as usize]
}

pub fn has_thirty_one_days(month: Month) -> bool {
    matches!(
        month,
        Month::January
            | Month::March
            | Month::May
            | Month::July
            | Month::August
            | Month::October
            | Month::December
    )
}

pub fn is_rest_day(weekday: Weekday) -> bool {
    weekday == Weekday::Sun
}

/// Months of one year grouped by the weekday their first day falls on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthPlacement {
    year: i64,
    columns: [Vec<Month>; 7],
}

impl MonthPlacement {
    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn columns(&self) -> &[Vec<Month>; 7] {
        &self.columns
    }

    pub fn column(&self, weekday: Weekday) -> &[Month] {
        &self.columns[weekday_index(weekday)]
    }

    /// Number of rows needed to show the longest column.
    pub fn rows(&self) -> usize {
        self.columns.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Month> {
        self.columns.get(col).and_then(|c| c.get(row)).copied()
    }

    pub fn labels(&self, language: Language) -> [Vec<&'static str>; 7] {
        let months = &language.translation().months;
        let mut labels: [Vec<&'static str>; 7] = Default::default();
        for (column, months_of_column) in labels.iter_mut().zip(self.columns.iter()) {
            column.extend(months_of_column.iter().map(|&m| months[month_index(m)]));
        }
        labels
    }
}

pub fn month_placement(year: i64) -> MonthPlacement {
    let mut columns: [Vec<Month>; 7] = Default::default();
    for &month in MONTHS.iter() {
        columns[weekday_index(first_weekday_of(year, month))].push(month);
    }
    MonthPlacement { year, columns }
}

pub fn rotate_left<T: Copy>(seq: &[T; 7], n: usize) -> [T; 7] {
    let mut row = *seq;
    row.rotate_left(n % 7);
    row
}

/// Row `i` is the week rotated left by `i` days.
pub fn weekday_rotation() -> [[Weekday; 7]; 7] {
    let mut grid = [WEEKDAYS; 7];
    for (i, row) in grid.iter_mut().enumerate() {
        *row = rotate_left(&WEEKDAYS, i);
    }
    grid
}

pub fn weekday_rotation_labels(language: Language) -> [[&'static str; 7]; 7] {
    let names = &language.translation().weekdays;
    let mut grid = [*names; 7];
    for (i, row) in grid.iter_mut().enumerate() {
        *row = rotate_left(names, i);
    }
    grid
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Constructor)]
pub struct Today {
    pub year: i64,
    pub month: Month,
    pub day: u32,
    pub weekday: Weekday,
}

impl Today {
    pub fn now() -> Self {
        Self::from_date(&Local::now().date_naive())
    }

    pub fn from_date<D: Datelike>(date: &D) -> Self {
        Today {
            year: date.year() as i64,
            month: MONTHS[date.month0() as usize],
            day: date.day(),
            weekday: date.weekday(),
        }
    }
}
