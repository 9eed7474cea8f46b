extern crate onepage as lib;

use flexi_logger::{FileSpec, Logger};
use lib::calendar::Today;
use lib::config::Config;
use lib::events::Dispatcher;
use lib::i18n::Language;
use lib::print::Printer;
use lib::sheet::Sheet;
use lib::state::ViewState;
use lib::ui::app::App;
use nix::sys::{signal, termios};
use std::io::{self, stdout, Write};
use std::os::unix::io::AsRawFd;
use std::path::PathBuf;
use structopt::StructOpt;
use unsegen::base::Terminal;

#[derive(Debug, StructOpt)]
#[structopt(name = "op", about = "A one page calendar for the terminal.")]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        short = "s",
        long = "show",
        help = "only print the calendar non-interactively"
    )]
    pub show: bool,

    #[structopt(
        short = "y",
        long = "year",
        help = "year to show instead of the current one",
        allow_hyphen_values = true
    )]
    pub year: Option<i64>,

    #[structopt(
        short = "l",
        long = "lang",
        help = "label language (en, zh, ms, vi)"
    )]
    pub language: Option<Language>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

/// Command line overrides win over the config file.
fn initial_state(args: &Args, config: &Config, today: &Today) -> ViewState {
    let language = args.language.unwrap_or(config.language);
    ViewState::new(args.year.unwrap_or(today.year), language)
}

fn show<W: Write>(
    state: &ViewState,
    today: &Today,
    config: &Config,
    out: &mut W,
) -> io::Result<()> {
    let sheet = Sheet::build(state, today);
    Printer::new(config).print(&sheet, out)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(ref log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    } else if !args.show {
        // stderr would scribble over the interactive screen
        logger = logger.do_not_log();
    }

    let _logger = logger.start()?;

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;

    let today = Today::now();
    let state = initial_state(&args, &config, &today);

    if args.show {
        let stdout = stdout();
        show(&state, &today, &config, &mut stdout.lock())?;
        return Ok(());
    }

    let stdin_fd = std::io::stdin().as_raw_fd();
    let orig_attr = std::sync::Mutex::new(termios::tcgetattr(stdin_fd)?);

    std::panic::set_hook(Box::new(move |info| {
        // Switch to main terminal screen
        println!("{}{}", termion::screen::ToMainScreen, termion::cursor::Show);

        if let Ok(attr) = orig_attr.lock() {
            let _ = termios::tcsetattr(stdin_fd, termios::SetArg::TCSANOW, &attr);
        }

        println!("onepage ran into a fatal error!");
        println!(
            "Consider filing an issue with a log file and the backtrace below at {}",
            env!("CARGO_PKG_REPOSITORY")
        );

        println!("{}", info);
        println!("{:?}", backtrace::Backtrace::new());
    }));

    let mut signals_to_wait = signal::SigSet::empty();
    signals_to_wait.add(signal::SIGWINCH);
    signals_to_wait.thread_block()?;

    let dispatcher = Dispatcher::from_config(&config, signals_to_wait);

    // Setup unsegen terminal
    let stdout = stdout();
    let term = Terminal::new(stdout.lock())?;

    let mut app = App::new(&config, state);

    app.run(dispatcher, term)
}
