//! endirim
//!
//! TUI catalog browser for student discount offers.
//!
//! Pure Core / Impure Shell: all filtering, sorting and pagination
//! state lives in `state` as pure transitions; `view` owns the
//! terminal and dispatches actions into the reducer.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod model;
pub mod sanitize;
pub mod state;
pub mod view;
