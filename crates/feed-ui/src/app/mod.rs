//! Application module

mod state;

pub use state::{App, AppMode, AppState};
