//! Configuration types for the GoShepherd client

use std::time::Duration;

use serde::{Deserialize, Serialize};
use shepherd_core::prelude::*;
use shepherd_core::{
    ServiceEndpoint, ToolType, DEFAULT_API_PATH, DEFAULT_SERVICE_URL, DEFAULT_UPLOAD_PATH,
};

/// Client settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub service: ServiceSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Where the registry service lives
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServiceSettings {
    /// Base URL of the service
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_api_path")]
    pub api_path: String,

    #[serde(default = "default_upload_path")]
    pub upload_path: String,

    /// Per-request timeout in milliseconds (0 = wait forever)
    #[serde(default)]
    pub request_timeout_ms: u64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            url: default_url(),
            api_path: default_api_path(),
            upload_path: default_upload_path(),
            request_timeout_ms: 0,
        }
    }
}

impl ServiceSettings {
    /// Parse the configured URL and paths into an endpoint
    pub fn endpoint(&self) -> Result<ServiceEndpoint> {
        Ok(ServiceEndpoint::parse(&self.url)?.with_paths(&self.api_path, &self.upload_path))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_ms > 0).then(|| Duration::from_millis(self.request_timeout_ms))
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Tool selected when the form opens
    #[serde(default)]
    pub default_tool: ToolType,

    /// Ask before quitting
    #[serde(default)]
    pub confirm_quit: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            default_tool: ToolType::Profile,
            confirm_quit: false,
        }
    }
}

fn default_url() -> String {
    DEFAULT_SERVICE_URL.to_string()
}

fn default_api_path() -> String {
    DEFAULT_API_PATH.to_string()
}

fn default_upload_path() -> String {
    DEFAULT_UPLOAD_PATH.to_string()
}
