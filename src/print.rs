//! Plain text rendering of a [`Sheet`], used for non-interactive output.

use itertools::Itertools;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

use crate::config::Config;
use crate::highlight::DateClass;
use crate::sheet::{Sheet, DATE_COLUMNS, LEGEND_COLUMNS};
use crate::ui::util::{center_in, date_label, month_label};
use crate::ui::CELL_WIDTH;

pub struct Printer {
    today_char: Option<char>,
    long_month_char: Option<char>,
}

impl Printer {
    pub fn new(config: &Config) -> Self {
        Printer {
            today_char: config.today_char,
            long_month_char: config.long_month_char,
        }
    }

    fn blank() -> String {
        " ".repeat(CELL_WIDTH)
    }

    fn bracket(text: &str) -> String {
        format!("[{}]", text)
    }

    pub fn lines(&self, sheet: &Sheet) -> Vec<String> {
        let width = (DATE_COLUMNS + LEGEND_COLUMNS) * CELL_WIDTH;
        let mut lines = Vec::new();

        let year = sheet.header.year.to_string();
        let gap = width
            .saturating_sub(sheet.header.title.width() + year.width())
            .max(1);
        lines.push(format!("{}{}{}", sheet.header.title, " ".repeat(gap), year));
        lines.push(String::new());

        for row in sheet.month_rows.iter() {
            let months = row
                .iter()
                .map(|cell| match cell {
                    Some(cell) => {
                        let marker = if cell.long { self.long_month_char } else { None };
                        let label = month_label(cell.label, marker);
                        if cell.current {
                            center_in(&Self::bracket(&label), CELL_WIDTH)
                        } else {
                            center_in(&label, CELL_WIDTH)
                        }
                    }
                    None => Self::blank(),
                })
                .join("");
            lines.push(format!("{}{}", " ".repeat(DATE_COLUMNS * CELL_WIDTH), months));
        }

        for row in sheet.body.iter() {
            let dates = row
                .dates
                .iter()
                .map(|cell| match cell {
                    Some(cell) if cell.class == DateClass::Today => {
                        center_in(&date_label(cell.day, self.today_char), CELL_WIDTH)
                    }
                    Some(cell) => center_in(&date_label(cell.day, None), CELL_WIDTH),
                    None => Self::blank(),
                })
                .join("");
            let legend = row
                .legend
                .iter()
                .map(|cell| {
                    if cell.highlighted {
                        center_in(&Self::bracket(cell.label), CELL_WIDTH)
                    } else {
                        center_in(cell.label, CELL_WIDTH)
                    }
                })
                .join("");
            lines.push(format!("{}{}", dates, legend));
        }

        lines
            .into_iter()
            .map(|l| l.trim_end().to_owned())
            .collect()
    }

    pub fn print<W: Write>(&self, sheet: &Sheet, out: &mut W) -> io::Result<()> {
        for line in self.lines(sheet) {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }
}
