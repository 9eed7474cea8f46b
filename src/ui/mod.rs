pub mod app;
pub mod command;
mod context;
mod sheet_window;
pub mod util;

pub use context::{Context, Mode, Theme};
pub use sheet_window::{SheetWindow, CELL_WIDTH};
