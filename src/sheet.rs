//! Layout model of the one page calendar.
//!
//! The sheet is a table of 12 columns: five date columns on the left and the
//! seven weekday columns on the right. Month labels sit on top of the weekday
//! columns, in the column of the weekday their first day falls on. Reading a
//! date's row across to a month's column gives the weekday of that date.

use chrono::{Month, Weekday};

use crate::calendar::{
    has_thirty_one_days, is_rest_day, month_placement, weekday_rotation, weekday_rotation_labels,
    Today,
};
use crate::highlight::{classify_date, is_current_month, is_highlighted, DateClass};
use crate::state::ViewState;

pub const DATE_COLUMNS: usize = 5;
pub const LEGEND_COLUMNS: usize = 7;
pub const BODY_ROWS: usize = 7;
pub const LAST_DAY: u32 = 31;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: &'static str,
    pub year: i64,
    pub is_current_year: bool,
    pub reset_label: &'static str,
    pub language_label: &'static str,
    pub language_name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCell {
    pub month: Month,
    pub label: &'static str,
    pub current: bool,
    pub long: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCell {
    pub day: u32,
    pub class: DateClass,
    pub long: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendCell {
    pub label: &'static str,
    pub weekday: Weekday,
    pub highlighted: bool,
    pub rest_day: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyRow {
    pub dates: Vec<Option<DateCell>>,
    pub legend: Vec<LegendCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub header: Header,
    pub month_rows: Vec<Vec<Option<MonthCell>>>,
    pub body: Vec<BodyRow>,
}

pub fn day_at(row: usize, col: usize) -> u32 {
    (row + 1 + col * BODY_ROWS) as u32
}

impl Sheet {
    pub fn build(state: &ViewState, today: &Today) -> Sheet {
        let translation = state.language.translation();

        let header = Header {
            title: translation.title,
            year: state.year,
            is_current_year: state.is_current_year(today),
            reset_label: translation.current_year,
            language_label: translation.language,
            language_name: translation.name,
        };

        let placement = month_placement(state.year);
        let month_labels = placement.labels(state.language);
        let month_rows = (0..placement.rows())
            .map(|row| {
                (0..LEGEND_COLUMNS)
                    .map(|col| {
                        placement.get(row, col).map(|month| MonthCell {
                            month,
                            label: month_labels[col][row],
                            current: is_current_month(month, today, state.year),
                            long: has_thirty_one_days(month),
                        })
                    })
                    .collect()
            })
            .collect();

        let rotation = weekday_rotation();
        let legend_labels = weekday_rotation_labels(state.language);
        let body = rotation
            .iter()
            .zip(legend_labels.iter())
            .enumerate()
            .map(|(row, (weekdays, labels))| BodyRow {
                dates: (0..DATE_COLUMNS)
                    .map(|col| {
                        let day = day_at(row, col);
                        if day > LAST_DAY {
                            None
                        } else {
                            Some(DateCell {
                                day,
                                class: classify_date(day, today, state.year),
                                long: day == LAST_DAY,
                            })
                        }
                    })
                    .collect(),
                legend: weekdays
                    .iter()
                    .zip(labels.iter())
                    .enumerate()
                    .map(|(col, (&weekday, &label))| LegendCell {
                        label,
                        weekday,
                        highlighted: is_highlighted(row, col, &state.hover, today, state.year),
                        rest_day: is_rest_day(weekday),
                    })
                    .collect(),
            })
            .collect();

        Sheet {
            header,
            month_rows,
            body,
        }
    }

    pub fn month_cells(&self) -> impl Iterator<Item = &MonthCell> {
        self.month_rows.iter().flatten().flatten()
    }

    pub fn date_cells(&self) -> impl Iterator<Item = &DateCell> {
        self.body.iter().flat_map(|r| r.dates.iter()).flatten()
    }

    pub fn legend_cells(&self) -> impl Iterator<Item = &LegendCell> {
        self.body.iter().flat_map(|r| r.legend.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::Hover;
    use crate::i18n::Language;
    use crate::state::Action;

    fn today() -> Today {
        Today::new(2024, Month::May, 17, Weekday::Fri)
    }

    #[test]
    fn sheet_has_all_cells() {
        let sheet = Sheet::build(&ViewState::current(&today(), Language::En), &today());
        assert_eq!(sheet.month_cells().count(), 12);
        assert_eq!(sheet.date_cells().count(), 31);
        assert_eq!(sheet.legend_cells().count(), 49);
        assert_eq!(sheet.body.len(), BODY_ROWS);

        // 32..=35 sit in the last column of rows 3..=6
        for row in 3..BODY_ROWS {
            assert_eq!(sheet.body[row].dates[4], None);
        }
        assert_eq!(sheet.body[2].dates[4].map(|c| c.day), Some(31));
        assert!(sheet.body[2].dates[4].map(|c| c.long).unwrap_or(false));
    }

    #[test]
    fn header_follows_state() {
        let state = ViewState::new(1999, Language::Ms);
        let sheet = Sheet::build(&state, &today());
        assert_eq!(sheet.header.title, "Kalendar Satu Halaman");
        assert_eq!(sheet.header.year, 1999);
        assert!(!sheet.header.is_current_year);
        assert_eq!(sheet.header.language_name, "Melayu");
    }

    #[test]
    fn months_are_labelled_and_flagged() {
        let sheet = Sheet::build(&ViewState::current(&today(), Language::Vi), &today());
        let may = sheet
            .month_cells()
            .find(|c| c.month == Month::May)
            .copied()
            .unwrap();
        assert_eq!(may.label, "Th5");
        assert!(may.current);
        assert!(may.long);
        assert_eq!(sheet.month_cells().filter(|c| c.current).count(), 1);
        assert_eq!(sheet.month_cells().filter(|c| c.long).count(), 7);

        // May 2024 starts on a Wednesday
        let col = sheet
            .month_rows
            .iter()
            .find_map(|r| r.iter().position(|c| c.map(|c| c.month) == Some(Month::May)))
            .unwrap();
        assert_eq!(col, 3);
    }

    #[test]
    fn labels_follow_the_calendar_tables() {
        let sheet = Sheet::build(&ViewState::new(2024, Language::Ms), &today());
        let labels = month_placement(2024).labels(Language::Ms);
        for (row, cells) in sheet.month_rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                assert_eq!(cell.map(|c| c.label), labels[col].get(row).copied());
            }
        }
        let august = sheet.month_cells().find(|c| c.month == Month::August).unwrap();
        assert_eq!(august.label, "Ogo");

        let names = weekday_rotation_labels(Language::Ms);
        for (row, body) in sheet.body.iter().enumerate() {
            let legend: Vec<_> = body.legend.iter().map(|c| c.label).collect();
            assert_eq!(legend, names[row].to_vec());
        }
        assert_eq!(sheet.body[1].legend[6].label, "Ahd");
        assert!(sheet.body[1].legend[6].rest_day);
    }

    #[test]
    fn dates_are_classified() {
        let sheet = Sheet::build(&ViewState::current(&today(), Language::En), &today());
        let class_of = |day: u32| sheet.date_cells().find(|c| c.day == day).unwrap().class;
        assert_eq!(class_of(1), DateClass::Past);
        assert_eq!(class_of(17), DateClass::Today);
        assert_eq!(class_of(31), DateClass::Future);
    }

    #[test]
    fn legend_highlight_and_rest_days() {
        let state = ViewState::current(&today(), Language::Zh);
        let sheet = Sheet::build(&state, &today());
        let highlighted: Vec<_> = sheet
            .body
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.legend
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| c.highlighted)
                    .map(move |(c, _)| (r, c))
            })
            .collect();
        assert_eq!(highlighted, vec![(2, 3)]);
        assert_eq!(sheet.body[0].legend[0].label, "周日");
        assert_eq!(sheet.legend_cells().filter(|c| c.rest_day).count(), 7);

        let hovered = state.apply(Action::Hover(Hover::at(0, 0)), &today());
        let sheet = Sheet::build(&hovered, &today());
        assert_eq!(sheet.legend_cells().filter(|c| c.highlighted).count(), 13);
    }
}
