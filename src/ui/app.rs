use crate::config::Config;
use crate::events::{Dispatcher, Event};
use crate::state::{Action, Direction, ViewState};

use super::command::CommandParser;
use super::{Context, Mode, SheetWindow, Theme};

use unsegen::base::{Cursor, GraphemeCluster, Terminal, Window};
use unsegen::input::{
    EditBehavior, Key, NavigateBehavior, Navigatable, OperationResult, ScrollBehavior, Scrollable,
};
use unsegen::widget::*;

pub struct App {
    context: Context,
}

impl App {
    pub fn new(config: &Config, state: ViewState) -> App {
        let context = Context::new(state, Theme::from_config(config));
        App { context }
    }

    fn bottom_bar<'w>(&'w self) -> impl Widget + 'w {
        let spacer = " ".with_demand(|_| Demand2D {
            width: ColDemand::exact(1),
            height: RowDemand::exact(1),
        });

        let mut layout = HLayout::new()
            .separator(GraphemeCluster::space())
            .widget(spacer);

        if self.context.mode == Mode::Command {
            layout = layout.widget(self.context.input_sink().as_widget());
        } else {
            layout = layout.widget(ErrorLine(&self.context));
        }

        layout
    }

    fn as_widget<'w>(&'w self) -> impl Widget + 'w {
        VLayout::new()
            .widget(SheetWindow::new(&self.context))
            .widget(self.bottom_bar())
    }

    pub fn run(
        &mut self,
        dispatcher: Dispatcher,
        mut term: Terminal,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut run = true;

        while run {
            // Handle events
            if let Ok(event) = dispatcher.next() {
                match event {
                    Event::Update => self.context.update(),
                    Event::Resize => log::debug!("Terminal resized"),
                    Event::Input(input) => {
                        if input.matches(Key::Esc) {
                            if self.context.mode == Mode::Normal {
                                self.context.apply(Action::Leave);
                            }
                            self.context.mode = Mode::Normal;
                        } else {
                            match self.context.mode {
                                Mode::Normal => {
                                    let leftover = input
                                        .chain((Key::Char('q'), || run = false))
                                        .chain((Key::Char(':'), || {
                                            self.context.last_error_message = None;
                                            self.context.mode = Mode::Command
                                        }))
                                        .chain((Key::Char('t'), || {
                                            self.context.apply(Action::ResetYear)
                                        }))
                                        .chain((Key::Char('L'), || {
                                            self.context.apply(Action::CycleLanguage)
                                        }))
                                        .chain(
                                            NavigateBehavior::new(&mut LegendFocusBehaviour(
                                                &mut self.context,
                                            ))
                                            .down_on(Key::Char('j'))
                                            .down_on(Key::Down)
                                            .up_on(Key::Char('k'))
                                            .up_on(Key::Up)
                                            .left_on(Key::Char('h'))
                                            .left_on(Key::Left)
                                            .right_on(Key::Char('l'))
                                            .right_on(Key::Right),
                                        )
                                        .chain(
                                            ScrollBehavior::new(&mut YearBehaviour(
                                                &mut self.context,
                                            ))
                                            .forwards_on(Key::Char(']'))
                                            .forwards_on(Key::Char('>'))
                                            .backwards_on(Key::Char('['))
                                            .backwards_on(Key::Char('<')),
                                        )
                                        .finish();

                                    if let Some(input) = leftover {
                                        log::trace!("Unhandled input {:?}", input.event);
                                    }
                                }
                                Mode::Command => {
                                    input
                                        .chain(
                                            EditBehavior::new(self.context.input_sink_mut())
                                                .delete_forwards_on(Key::Delete)
                                                .delete_backwards_on(Key::Backspace)
                                                .left_on(Key::Left)
                                                .right_on(Key::Right),
                                        )
                                        .chain(
                                            ScrollBehavior::new(self.context.input_sink_mut())
                                                .backwards_on(Key::Up)
                                                .forwards_on(Key::Down),
                                        )
                                        .chain(CommandParser::new(&mut self.context, &mut run))
                                        .finish();
                                }
                            }
                        }
                    }
                }
            }

            // Draw
            let root = term.create_root_window();
            self.as_widget().draw(root, RenderingHints::new());
            term.present();
        }

        Ok(())
    }
}

struct ErrorLine<'a>(&'a Context);

impl Widget for ErrorLine<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(1),
            height: RowDemand::exact(1),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        if let Some(msg) = &self.0.last_error_message {
            let mut cursor = Cursor::new(&mut window).style_modifier(self.0.theme.error_style);
            cursor.write(msg);
        }
    }
}

/// Moves the legend focus, the keyboard counterpart of hovering a cell.
struct LegendFocusBehaviour<'a>(&'a mut Context);

impl LegendFocusBehaviour<'_> {
    fn step(&mut self, direction: Direction) -> OperationResult {
        self.0.apply(Action::MoveHover(direction));
        Ok(())
    }
}

impl Navigatable for LegendFocusBehaviour<'_> {
    fn move_down(&mut self) -> OperationResult {
        self.step(Direction::Down)
    }

    fn move_left(&mut self) -> OperationResult {
        self.step(Direction::Left)
    }

    fn move_right(&mut self) -> OperationResult {
        self.step(Direction::Right)
    }

    fn move_up(&mut self) -> OperationResult {
        self.step(Direction::Up)
    }
}

struct YearBehaviour<'a>(&'a mut Context);

impl Scrollable for YearBehaviour<'_> {
    fn scroll_backwards(&mut self) -> OperationResult {
        self.0.apply(Action::PrevYear);
        Ok(())
    }

    fn scroll_forwards(&mut self) -> OperationResult {
        self.0.apply(Action::NextYear);
        Ok(())
    }
}
