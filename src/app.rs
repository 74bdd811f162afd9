//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the loaded tracks, the
//! display tree of the selected track, the filter and the status line.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
