//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{Alert, App, AppEvent, Statistics, run_tui};
