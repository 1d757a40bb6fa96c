//! Configuration file parsing for the GoShepherd client
//!
//! Settings live in `<config_dir>/go-shepherd/config.toml` unless a path is
//! given on the command line.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, load_settings_from};
pub use types::*;
