//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use shepherd_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "go-shepherd";

/// Default location: `<config_dir>/go-shepherd/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Resolve the config path (explicit or default) and load it
pub fn load_settings_from(explicit: Option<&Path>) -> Settings {
    match explicit.map(Path::to_path_buf).or_else(default_config_path) {
        Some(path) => load_settings(&path),
        None => {
            warn!("No config directory on this platform, using defaults");
            Settings::default()
        }
    }
}

/// Write a commented default config file.
///
/// Returns `Ok(false)` when a file already exists at `path` (left untouched).
pub fn init_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", dir.display(), e)))?;
    }

    std::fs::write(path, generate_default_config())
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;

    info!("Wrote default config to {:?}", path);
    Ok(true)
}

fn generate_default_config() -> String {
    r#"# GoShepherd Client Configuration

[service]
url = "http://127.0.0.1:7777"
api_path = "/api"
upload_path = "/upload/"
request_timeout_ms = 0     # 0 = wait for the service indefinitely

[ui]
default_tool = "profile"   # profile | trace | profile-diff
confirm_quit = false
"#
    .to_string()
}
