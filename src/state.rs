use crate::calendar::Today;
use crate::highlight::{current_cell, Hover};
use crate::i18n::Language;

const LEGEND_SIZE: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    NextYear,
    PrevYear,
    ShiftYear(i64),
    ResetYear,
    SetYear(i64),
    SetLanguage(Language),
    CycleLanguage,
    Hover(Hover),
    MoveHover(Direction),
    Leave,
}

/// Everything the user can change. Tables shown on screen are derived from
/// this on every draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub year: i64,
    pub hover: Hover,
    pub language: Language,
}

impl ViewState {
    pub fn new(year: i64, language: Language) -> Self {
        ViewState {
            year,
            hover: Hover::none(),
            language,
        }
    }

    pub fn current(today: &Today, language: Language) -> Self {
        Self::new(today.year, language)
    }

    pub fn is_current_year(&self, today: &Today) -> bool {
        self.year == today.year
    }

    pub fn apply(&self, action: Action, today: &Today) -> ViewState {
        let mut next = *self;
        match action {
            Action::NextYear => next.year = self.year.saturating_add(1),
            Action::PrevYear => next.year = self.year.saturating_sub(1),
            Action::ShiftYear(n) => next.year = self.year.saturating_add(n),
            Action::ResetYear => next.year = today.year,
            Action::SetYear(year) => next.year = year,
            Action::SetLanguage(language) => next.language = language,
            Action::CycleLanguage => next.language = self.language.next(),
            Action::Hover(hover) => {
                next.hover = Hover {
                    row: hover.row.filter(|&r| r < LEGEND_SIZE),
                    col: hover.col.filter(|&c| c < LEGEND_SIZE),
                }
            }
            Action::MoveHover(direction) => next.hover = self.moved_hover(direction, today),
            Action::Leave => next.hover = Hover::none(),
        }
        next
    }

    fn moved_hover(&self, direction: Direction, today: &Today) -> Hover {
        let (base_row, base_col) = if self.hover.is_active() || !self.is_current_year(today) {
            (0, 0)
        } else {
            current_cell(today)
        };

        if !self.hover.is_active() {
            return Hover::at(base_row, base_col);
        }

        let row = self.hover.row.unwrap_or(base_row);
        let col = self.hover.col.unwrap_or(base_col);
        let wrap = |v: usize, delta: isize| {
            (v as isize + delta).rem_euclid(LEGEND_SIZE as isize) as usize
        };

        match direction {
            Direction::Up => Hover::at(wrap(row, -1), col),
            Direction::Down => Hover::at(wrap(row, 1), col),
            Direction::Left => Hover::at(row, wrap(col, -1)),
            Direction::Right => Hover::at(row, wrap(col, 1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Month, Weekday};

    fn today() -> Today {
        Today::new(2024, Month::May, 17, Weekday::Fri)
    }

    #[test]
    fn year_steps_and_reset() {
        let state = ViewState::current(&today(), Language::En);
        let next = state.apply(Action::NextYear, &today());
        assert_eq!(next.year, 2025);
        let prev = next
            .apply(Action::PrevYear, &today())
            .apply(Action::PrevYear, &today());
        assert_eq!(prev.year, 2023);
        assert_eq!(prev.apply(Action::ResetYear, &today()).year, 2024);
        assert_eq!(state.apply(Action::ShiftYear(-30), &today()).year, 1994);
        assert_eq!(state.apply(Action::SetYear(-44), &today()).year, -44);
    }

    #[test]
    fn year_saturates_at_bounds() {
        let state = ViewState::new(i64::MAX, Language::En);
        assert_eq!(state.apply(Action::NextYear, &today()).year, i64::MAX);
        let state = ViewState::new(i64::MIN, Language::En);
        assert_eq!(state.apply(Action::PrevYear, &today()).year, i64::MIN);
    }

    #[test]
    fn replacements_are_idempotent() {
        let state = ViewState::new(1990, Language::En);
        for action in [
            Action::ResetYear,
            Action::SetYear(3000),
            Action::SetLanguage(Language::Vi),
            Action::Hover(Hover::at(1, 2)),
            Action::Leave,
        ]
        .iter()
        {
            let once = state.apply(*action, &today());
            assert_eq!(once.apply(*action, &today()), once);
        }
    }

    #[test]
    fn language_changes_leave_year_and_hover() {
        let state =
            ViewState::new(1990, Language::En).apply(Action::Hover(Hover::at(0, 1)), &today());
        let zh = state.apply(Action::SetLanguage(Language::Zh), &today());
        assert_eq!(zh.language, Language::Zh);
        assert_eq!(zh.year, 1990);
        assert_eq!(zh.hover, Hover::at(0, 1));
        assert_eq!(zh.apply(Action::CycleLanguage, &today()).language, Language::Ms);
    }

    #[test]
    fn hover_outside_legend_is_dropped() {
        let state = ViewState::new(2024, Language::En).apply(
            Action::Hover(Hover {
                row: Some(9),
                col: Some(3),
            }),
            &today(),
        );
        assert_eq!(
            state.hover,
            Hover {
                row: None,
                col: Some(3)
            }
        );
        assert_eq!(state.apply(Action::Leave, &today()).hover, Hover::none());
    }

    #[test]
    fn keyboard_focus_starts_at_today_and_wraps() {
        let state = ViewState::current(&today(), Language::En);
        // May 2024 starts on a Wednesday, (17 - 1) % 7 == 2
        let focused = state.apply(Action::MoveHover(Direction::Right), &today());
        assert_eq!(focused.hover, Hover::at(2, 3));

        let up = focused
            .apply(Action::MoveHover(Direction::Up), &today())
            .apply(Action::MoveHover(Direction::Up), &today())
            .apply(Action::MoveHover(Direction::Up), &today());
        assert_eq!(up.hover, Hover::at(6, 3));

        let right = up
            .apply(Action::Hover(Hover::at(6, 6)), &today())
            .apply(Action::MoveHover(Direction::Right), &today());
        assert_eq!(right.hover, Hover::at(6, 0));
    }

    #[test]
    fn keyboard_focus_in_other_year_starts_at_origin() {
        let state = ViewState::new(2000, Language::En);
        assert_eq!(
            state.apply(Action::MoveHover(Direction::Down), &today()).hover,
            Hover::at(0, 0)
        );
    }
}
