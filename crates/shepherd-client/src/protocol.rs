//! GoShepherd request/response protocol
//!
//! Every operation is a GET against the single API endpoint with an `op`
//! query parameter. Responses share one plain-text channel, so each is decoded
//! exactly once here into a typed value:
//!
//! | op    | body                                   | decoded as                      |
//! |-------|----------------------------------------|---------------------------------|
//! | `get` | JSON array of `{Name,Path1,Path2,Port}` | `Vec<RegistryEntry>`            |
//! | `add` | decimal port, or a rejection message   | [`AddOutcome`]                  |
//! | `rmv` | ignored                                | `()`                            |
//!
//! An empty body means the service is not working.

use std::path::PathBuf;

use serde::Deserialize;
use shepherd_core::prelude::*;
use shepherd_core::{normalize_path2, Port, RegistryEntry, ToolType, WireEntry};

/// Literal the upload endpoint returns in place of a path when it fails
const UPLOAD_NULL_PATH: &str = "null";

// ─────────────────────────────────────────────────────────────────────────────
// Requests
// ─────────────────────────────────────────────────────────────────────────────

/// Parameters of one registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRequest {
    pub tool: ToolType,
    pub name: String,
    pub path1: String,
    /// Always empty unless `tool` compares two files
    pub path2: String,
}

impl AddRequest {
    /// Build a request from raw form input.
    ///
    /// The hidden-field placeholder is normalized away and the secondary path
    /// is dropped for tools that take a single file.
    pub fn new(
        tool: ToolType,
        name: impl Into<String>,
        path1: impl Into<String>,
        path2: &str,
    ) -> Self {
        let path2 = if tool.requires_secondary_path() {
            normalize_path2(path2)
        } else {
            String::new()
        };
        Self {
            tool,
            name: name.into(),
            path1: path1.into(),
            path2,
        }
    }
}

/// A file to upload before registering it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    /// Local file to send
    pub file: PathBuf,
    /// Sent as `proName`; the service prefixes the stored file name with it
    pub project_name: String,
}

/// One call against the API endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    List,
    Add(AddRequest),
    Remove(Port),
}

impl ApiRequest {
    pub fn op(&self) -> &'static str {
        match self {
            ApiRequest::List => "get",
            ApiRequest::Add(_) => "add",
            ApiRequest::Remove(_) => "rmv",
        }
    }

    /// Query string pairs, `op` first
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("op", self.op().to_string())];
        match self {
            ApiRequest::List => {}
            ApiRequest::Add(req) => {
                pairs.push(("tool", req.tool.wire_value().to_string()));
                pairs.push(("name", req.name.clone()));
                pairs.push(("path1", req.path1.clone()));
                pairs.push(("path2", req.path2.clone()));
            }
            ApiRequest::Remove(port) => {
                pairs.push(("port", port.to_string()));
            }
        }
        pairs
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Responses
// ─────────────────────────────────────────────────────────────────────────────

/// Classified response to an `add` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The tool is running on this port
    Assigned(Port),
    /// The service refused and explained why (shown verbatim)
    Rejected(String),
    /// Empty body: the service is not working
    ServiceDown,
}

/// Decode the body of an `add` response.
///
/// A body is numeric when it parses as a finite number. Numeric bodies must
/// be a whole number in the port range; anything else numeric is malformed.
pub fn decode_add(body: &str) -> Result<AddOutcome> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Ok(AddOutcome::ServiceDown);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            if value.fract() == 0.0 && (1.0..=f64::from(u16::MAX)).contains(&value) {
                // Range checked above
                let port = Port::new(value as u16)
                    .ok_or_else(|| Error::malformed(format!("port out of range: {trimmed}")))?;
                Ok(AddOutcome::Assigned(port))
            } else {
                Err(Error::malformed(format!("not a usable port: {trimmed}")))
            }
        }
        _ => Ok(AddOutcome::Rejected(body.to_string())),
    }
}

/// Decode the body of a `get` response.
///
/// The payload is parsed strictly against the record schema; it is data,
/// never code.
pub fn decode_list(body: &str) -> Result<Vec<RegistryEntry>> {
    if body.trim().is_empty() {
        return Err(Error::service_unavailable("empty list response"));
    }

    let records: Vec<WireEntry> =
        serde_json::from_str(body).map_err(|e| Error::malformed(e.to_string()))?;

    records.into_iter().map(RegistryEntry::try_from).collect()
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(rename = "Path")]
    path: String,
}

/// Decode the body of an upload response into the stored path
pub fn decode_upload(body: &str) -> Result<String> {
    let response: UploadResponse = serde_json::from_str(body)
        .map_err(|e| Error::upload(format!("unreadable upload response: {e}")))?;

    if response.path.is_empty() || response.path == UPLOAD_NULL_PATH {
        return Err(Error::upload("service did not store the file"));
    }
    Ok(response.path)
}
