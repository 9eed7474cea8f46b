use unsegen::base::*;
use unsegen::widget::*;

use super::util::{center_in, date_label, month_label};
use super::{Context, Theme};
use crate::highlight::DateClass;
use crate::sheet::{
    DateCell, Header, LegendCell, MonthCell, Sheet, BODY_ROWS, DATE_COLUMNS, LEGEND_COLUMNS,
};

pub const CELL_WIDTH: usize = 7;
const HEADER_ROWS: usize = 3;

pub struct SheetWindow<'a> {
    context: &'a Context,
}

impl<'a> SheetWindow<'a> {
    pub fn new(context: &'a Context) -> Self {
        SheetWindow { context }
    }

    fn draw_header<T: CursorTarget>(cursor: &mut Cursor<T>, header: &Header, theme: &Theme) {
        cursor.set_style_modifier(theme.title_style);
        cursor.write(header.title);
        cursor.set_style_modifier(StyleModifier::default());
        cursor.fill_and_wrap_line();

        cursor.set_style_modifier(theme.hint_style);
        cursor.write("[ ");
        cursor.set_style_modifier(if header.is_current_year {
            theme.current_year_style
        } else {
            theme.year_style
        });
        cursor.write(&header.year.to_string());
        cursor.set_style_modifier(theme.hint_style);
        cursor.write(&format!(
            " ]   t: {}   L: {} ({})",
            header.reset_label, header.language_label, header.language_name
        ));
        cursor.set_style_modifier(StyleModifier::default());
        cursor.fill_and_wrap_line();
        cursor.fill_and_wrap_line();
    }

    fn draw_month<T: CursorTarget>(
        cursor: &mut Cursor<T>,
        cell: &Option<MonthCell>,
        theme: &Theme,
    ) {
        match cell {
            Some(cell) => {
                let style = if cell.current {
                    theme.current_month_style
                } else {
                    theme.month_style
                };
                let (style, marker) = if cell.long {
                    (style.format(theme.long_month_text_style), theme.long_month_char)
                } else {
                    (style, None)
                };
                cursor.set_style_modifier(style);
                cursor.write(&center_in(&month_label(cell.label, marker), CELL_WIDTH));
            }
            None => {
                cursor.set_style_modifier(StyleModifier::default());
                cursor.write(&" ".repeat(CELL_WIDTH));
            }
        }
    }

    fn draw_date<T: CursorTarget>(
        cursor: &mut Cursor<T>,
        cell: &Option<DateCell>,
        theme: &Theme,
    ) {
        match cell {
            Some(cell) => {
                let (style, marker) = match cell.class {
                    DateClass::Today => (theme.today_day_style, theme.today_day_char),
                    DateClass::Past => (theme.past_day_style, None),
                    DateClass::Future => (theme.day_style, None),
                };
                let style = if cell.long {
                    style.format(theme.long_month_text_style)
                } else {
                    style
                };
                cursor.set_style_modifier(style);
                cursor.write(&center_in(&date_label(cell.day, marker), CELL_WIDTH));
            }
            None => {
                cursor.set_style_modifier(StyleModifier::default());
                cursor.write(&" ".repeat(CELL_WIDTH));
            }
        }
    }

    fn draw_legend<T: CursorTarget>(cursor: &mut Cursor<T>, cell: &LegendCell, theme: &Theme) {
        cursor.set_style_modifier(if cell.rest_day {
            theme.rest_day_style
        } else {
            theme.legend_style
        });
        if cell.highlighted {
            cursor.apply_style_modifier(theme.highlight_style);
        }
        cursor.write(&center_in(cell.label, CELL_WIDTH));
    }
}

impl Widget for SheetWindow<'_> {
    fn space_demand(&self) -> Demand2D {
        let month_rows = self.context.sheet().month_rows.len();
        Demand2D {
            width: ColDemand::at_least((DATE_COLUMNS + LEGEND_COLUMNS) * CELL_WIDTH),
            height: RowDemand::at_least(HEADER_ROWS + month_rows + BODY_ROWS),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let sheet: Sheet = self.context.sheet();
        let theme = &self.context.theme;

        let mut cursor = Cursor::new(&mut window);

        Self::draw_header(&mut cursor, &sheet.header, theme);

        for row in sheet.month_rows.iter() {
            cursor.write(&" ".repeat(DATE_COLUMNS * CELL_WIDTH));
            for cell in row.iter() {
                Self::draw_month(&mut cursor, cell, theme);
            }
            cursor.set_style_modifier(StyleModifier::default());
            cursor.fill_and_wrap_line();
        }

        for row in sheet.body.iter() {
            for cell in row.dates.iter() {
                Self::draw_date(&mut cursor, cell, theme);
            }
            for cell in row.legend.iter() {
                Self::draw_legend(&mut cursor, cell, theme);
            }
            cursor.set_style_modifier(StyleModifier::default());
            cursor.fill_and_wrap_line();
        }
    }
}
