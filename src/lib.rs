//! taskboard: a personal task board with a terminal UI and a scriptable CLI.
//!
//! The library is split the same way the binary uses it: `model` holds the
//! data types, `ops` the store and its derived views, `io` the persistence
//! layer, and `cli`/`tui` the two user-facing surfaces.

pub mod cli;
pub mod io;
pub mod model;
pub mod ops;
pub mod tui;
