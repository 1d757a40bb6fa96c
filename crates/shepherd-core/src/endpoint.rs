//! Location of the registry service and URLs derived from it

use url::Url;

use crate::error::{Error, Result};
use crate::types::Port;

pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:7777";
pub const DEFAULT_API_PATH: &str = "/api";
pub const DEFAULT_UPLOAD_PATH: &str = "/upload/";

/// Base URL of a GoShepherd instance plus the paths of its two endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    base: Url,
    api_path: String,
    upload_path: String,
}

impl ServiceEndpoint {
    /// Parse a service URL. A bare `host:port` is treated as `http://host:port`.
    pub fn parse(raw: &str) -> Result<Self> {
        let candidate = if raw.contains("://") {
            raw.to_string()
        } else {
            format!("http://{raw}")
        };
        let base = Url::parse(&candidate).map_err(|e| Error::invalid_endpoint(raw, e.to_string()))?;
        if base.host_str().is_none() {
            return Err(Error::invalid_endpoint(raw, "missing host"));
        }
        Ok(Self {
            base,
            api_path: DEFAULT_API_PATH.to_string(),
            upload_path: DEFAULT_UPLOAD_PATH.to_string(),
        })
    }

    pub fn with_paths(mut self, api_path: impl Into<String>, upload_path: impl Into<String>) -> Self {
        self.api_path = api_path.into();
        self.upload_path = upload_path.into();
        self
    }

    /// URL of the `op=` endpoint
    pub fn api_url(&self) -> Result<Url> {
        self.join(&self.api_path)
    }

    /// URL of the multipart upload endpoint
    pub fn upload_url(&self) -> Result<Url> {
        self.join(&self.upload_path)
    }

    /// Host of the service with any port stripped
    pub fn host(&self) -> &str {
        self.base.host_str().unwrap_or("127.0.0.1")
    }

    /// The URL at which a registered tool is served.
    ///
    /// Tools listen on the service's host, never on the service's own port.
    pub fn access_url(&self, port: Port) -> String {
        format!("http://{}:{}", self.host(), port)
    }

    /// `scheme://host[:port]` shown in the header
    pub fn display_base(&self) -> String {
        self.base.as_str().trim_end_matches('/').to_string()
    }

    fn join(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| Error::invalid_endpoint(path, e.to_string()))
    }
}
