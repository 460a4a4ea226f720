mod app;
pub mod board;
pub mod form;

pub use app::{App, AppState, Mode};
