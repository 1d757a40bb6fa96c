//! shepherd-tui - Terminal UI for the GoShepherd client
//!
//! Wraps an [`Engine`](shepherd_app::Engine) with ratatui rendering and
//! crossterm input: a registration form above the live registry table.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
