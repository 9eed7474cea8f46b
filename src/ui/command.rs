use std::str::FromStr;
use unsegen::input::*;

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, char, digit1, space0, space1},
    combinator::{all_consuming, map, map_res, opt, recognize, rest},
    sequence::{delimited, pair, preceded, separated_pair, tuple},
    IResult,
};

use super::context::{Context, Mode};
use crate::error::{Error, ErrorKind, Result};
use crate::highlight::Hover;
use crate::i18n::Language;
use crate::state::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Apply(Action),
    Quit,
}

pub enum Handler {
    Arg(fn(&str) -> Result<Command>),
    NoArg(fn() -> Command),
    Repeatable(fn(i64) -> Command),
}

const COMMANDS: &[(&'static str, Handler)] = &[
    (
        "next",
        Handler::Repeatable(|n| Command::Apply(Action::ShiftYear(n))),
    ),
    (
        "prev",
        Handler::Repeatable(|n| Command::Apply(Action::ShiftYear(n.saturating_neg()))),
    ),
    ("year", Handler::Arg(year_command)),
    ("today", Handler::NoArg(|| Command::Apply(Action::ResetYear))),
    ("lang", Handler::Arg(lang_command)),
    ("focus", Handler::Arg(focus_command)),
    ("unfocus", Handler::NoArg(|| Command::Apply(Action::Leave))),
    ("q", Handler::NoArg(|| Command::Quit)),
    ("quit", Handler::NoArg(|| Command::Quit)),
];

fn command_error(msg: &str) -> Error {
    Error::new(ErrorKind::CommandParse, msg)
}

fn integer(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(char('-')), digit1)), i64::from_str)(input)
}

/// A 1-based legend row or column, or `-` for "any".
fn axis(input: &str) -> IResult<&str, Option<usize>> {
    alt((
        map(tag("-"), |_| None),
        map(map_res(digit1, usize::from_str), Some),
    ))(input)
}

fn year_command(arg: &str) -> Result<Command> {
    let (_, year) = all_consuming(integer)(arg)?;
    Ok(Command::Apply(Action::SetYear(year)))
}

fn lang_command(arg: &str) -> Result<Command> {
    Ok(Command::Apply(Action::SetLanguage(arg.parse::<Language>()?)))
}

fn focus_command(arg: &str) -> Result<Command> {
    let (_, (row, col)) = all_consuming(separated_pair(axis, space1, axis))(arg)?;

    let to_index = |v: Option<usize>| -> Result<Option<usize>> {
        match v {
            Some(n @ 1..=7) => Ok(Some(n - 1)),
            Some(n) => Err(command_error(&format!("{} is outside of 1..7", n))),
            None => Ok(None),
        }
    };

    Ok(Command::Apply(Action::Hover(Hover {
        row: to_index(row)?,
        col: to_index(col)?,
    })))
}

/// `[count]name[ argument]`
fn command_line(input: &str) -> IResult<&str, (Option<i64>, &str, Option<&str>)> {
    all_consuming(delimited(
        space0,
        tuple((
            opt(map_res(digit1, i64::from_str)),
            alpha1,
            opt(preceded(space1, rest)),
        )),
        space0,
    ))(input)
}

pub fn parse_command(cmd: &str) -> Result<Command> {
    let (_, (count, name, arg)) = command_line(cmd.trim_end())?;
    let arg = arg.map(str::trim).filter(|a| !a.is_empty());

    let handler = COMMANDS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, h)| h)
        .ok_or_else(|| command_error(&format!("unknown command '{}'", name)))?;

    match (handler, count, arg) {
        (Handler::Repeatable(h), Some(n), None) => Ok(h(n)),
        (Handler::Repeatable(h), None, Some(a)) => {
            let (_, n) = all_consuming(integer)(a)?;
            Ok(h(n))
        }
        (Handler::Repeatable(h), None, None) => Ok(h(1)),
        (Handler::Arg(h), None, Some(a)) => h(a),
        (Handler::Arg(_), None, None) => {
            Err(command_error(&format!("'{}' needs an argument", name)))
        }
        (Handler::NoArg(h), None, None) => Ok(h()),
        _ => Err(command_error(&format!("invalid use of '{}'", name))),
    }
}

pub struct CommandParser<'a> {
    context: &'a mut Context,
    run: &'a mut bool,
}

impl<'a> CommandParser<'a> {
    pub fn new(context: &'a mut Context, run: &'a mut bool) -> Self {
        CommandParser { context, run }
    }

    fn run_command(&mut self, cmd: &str) -> Result<()> {
        match parse_command(cmd)? {
            Command::Apply(action) => self.context.apply(action),
            Command::Quit => *self.run = false,
        }
        Ok(())
    }

    fn report_error(&mut self, error: Error) {
        log::debug!("{}", error);
        self.context.last_error_message = Some(format!("{}", error));
    }
}

impl Behavior for CommandParser<'_> {
    fn input(mut self, input: Input) -> Option<Input> {
        if let Event::Key(Key::Char('\n')) = input.event {
            let cmd = self.context.input_sink_mut().finish_line().to_owned();
            if let Err(e) = self.run_command(&cmd) {
                self.report_error(e);
            } else {
                self.context.last_error_message = None;
            }
            self.context.mode = Mode::Normal;
            None
        } else {
            Some(input)
        }
    }
}
