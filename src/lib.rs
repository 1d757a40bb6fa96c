//! GoShepherd client
//!
//! Terminal client for a GoShepherd registry: the interactive TUI plus
//! scripting commands that share its request and classification layer.

pub mod cli;

pub use cli::Command;
