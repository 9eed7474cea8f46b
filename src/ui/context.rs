use unsegen::base::style::*;
use unsegen::widget::builtin::PromptLine;

use crate::calendar::Today;
use crate::config::Config;
use crate::sheet::Sheet;
use crate::state::{Action, ViewState};

#[derive(Clone, Debug, PartialEq)]
pub enum Mode {
    Normal,
    Command,
}

#[derive(Clone, Debug)]
pub struct Theme {
    pub title_style: StyleModifier,
    pub year_style: StyleModifier,
    pub current_year_style: StyleModifier,
    pub hint_style: StyleModifier,
    pub month_style: StyleModifier,
    pub current_month_style: StyleModifier,
    pub long_month_text_style: TextFormatModifier,
    pub long_month_char: Option<char>,
    pub day_style: StyleModifier,
    pub past_day_style: StyleModifier,
    pub today_day_style: StyleModifier,
    pub today_day_char: Option<char>,
    pub legend_style: StyleModifier,
    pub rest_day_style: StyleModifier,
    pub highlight_style: StyleModifier,
    pub error_style: StyleModifier,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            title_style: StyleModifier::default().fg_color(Color::Yellow),
            year_style: StyleModifier::default(),
            current_year_style: StyleModifier::default().fg_color(Color::Blue),
            hint_style: StyleModifier::default().fg_color(Color::LightBlack),
            month_style: StyleModifier::default().fg_color(Color::Blue),
            current_month_style: StyleModifier::default()
                .bg_color(Color::Blue)
                .fg_color(Color::White),
            long_month_text_style: TextFormatModifier::default().underline(true),
            long_month_char: None,
            day_style: StyleModifier::default(),
            past_day_style: StyleModifier::default().fg_color(Color::LightBlack),
            today_day_style: StyleModifier::default().invert(true),
            today_day_char: Some('*'),
            legend_style: StyleModifier::default(),
            rest_day_style: StyleModifier::default().fg_color(Color::Red),
            highlight_style: StyleModifier::default().invert(true),
            error_style: StyleModifier::default().fg_color(Color::LightRed),
        }
    }
}

impl Theme {
    /// Terminals without underline support still get the configured marker.
    pub fn from_config(config: &Config) -> Self {
        Theme {
            today_day_char: config.today_char,
            long_month_char: config.long_month_char,
            ..Theme::default()
        }
    }
}

pub struct Context {
    pub mode: Mode,
    pub theme: Theme,
    pub last_error_message: Option<String>,
    state: ViewState,
    today: Today,
    command_line: PromptLine,
}

impl Context {
    pub fn new(state: ViewState, theme: Theme) -> Self {
        Context {
            mode: Mode::Normal,
            theme,
            last_error_message: None,
            state,
            today: Today::now(),
            command_line: PromptLine::with_prompt(":".to_owned()),
        }
    }

    #[cfg(test)]
    pub fn with_today(mut self, today: Today) -> Self {
        self.today = today;
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn today(&self) -> &Today {
        &self.today
    }

    pub fn apply(&mut self, action: Action) {
        let next = self.state.apply(action, &self.today);
        if next != self.state {
            log::debug!("{:?}: {:?} -> {:?}", action, self.state, next);
        }
        self.state = next;
    }

    pub fn update(&mut self) {
        let today = Today::now();
        if today != self.today {
            log::info!("Date changed to {}-{:?}-{}", today.year, today.month, today.day);
        }
        self.today = today;
    }

    pub fn sheet(&self) -> Sheet {
        Sheet::build(&self.state, &self.today)
    }

    pub fn input_sink(&self) -> &PromptLine {
        &self.command_line
    }

    pub fn input_sink_mut(&mut self) -> &mut PromptLine {
        &mut self.command_line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use chrono::{Month, Weekday};

    fn context() -> Context {
        let today = Today::new(2024, Month::May, 17, Weekday::Fri);
        Context::new(ViewState::current(&today, Language::En), Theme::default())
            .with_today(today)
    }

    #[test]
    fn actions_replace_state() {
        let mut ctx = context();
        ctx.apply(Action::NextYear);
        ctx.apply(Action::SetLanguage(Language::Vi));
        assert_eq!(ctx.state().year, 2025);
        assert_eq!(ctx.sheet().header.title, "Lịch Một Trang");
        assert!(!ctx.sheet().header.is_current_year);

        ctx.apply(Action::ResetYear);
        assert_eq!(ctx.state().year, ctx.today().year);
    }

    #[test]
    fn theme_takes_markers_from_config() {
        let config = Config {
            today_char: Some('>'),
            long_month_char: None,
            ..Config::default()
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.today_day_char, Some('>'));
        assert_eq!(theme.long_month_char, None);
    }
}
