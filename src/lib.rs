pub mod calendar;
pub mod config;
pub mod error;
pub mod events;
pub mod highlight;
pub mod i18n;
pub mod print;
pub mod sheet;
pub mod state;
pub mod ui;
