//! Domain types for the tool registry

use std::fmt;
use std::num::NonZeroU16;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Value the secondary path field holds while it is hidden.
///
/// Never sent to the server; see [`normalize_path2`].
pub const PATH2_PLACEHOLDER: &str = "dummy-placeholder";

/// Normalize the secondary path for transmission.
///
/// The hidden-field placeholder and blank input both mean "no secondary path".
pub fn normalize_path2(raw: &str) -> String {
    if raw == PATH2_PLACEHOLDER || raw.trim().is_empty() {
        String::new()
    } else {
        raw.to_string()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Port
// ─────────────────────────────────────────────────────────────────────────────

/// A port assigned by the registry service. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Port(NonZeroU16);

impl Port {
    pub fn new(value: u16) -> Option<Self> {
        NonZeroU16::new(value).map(Self)
    }

    pub fn get(self) -> u16 {
        self.0.get()
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Port {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u16>()
            .ok()
            .and_then(Port::new)
            .ok_or_else(|| Error::malformed(format!("invalid port: {s:?}")))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ToolType
// ─────────────────────────────────────────────────────────────────────────────

/// Which Go tool integration a registration starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolType {
    /// `go tool pprof` on a single profile
    #[default]
    Profile,
    /// `go tool trace` on a trace file
    Trace,
    /// `go tool pprof -base` comparing two profiles
    ProfileDiff,
}

impl ToolType {
    pub const ALL: [ToolType; 3] = [ToolType::Profile, ToolType::Trace, ToolType::ProfileDiff];

    /// Value of the `tool` query parameter
    pub fn wire_value(&self) -> &'static str {
        match self {
            ToolType::Profile => "0",
            ToolType::Trace => "1",
            ToolType::ProfileDiff => "2",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "0" => Some(ToolType::Profile),
            "1" => Some(ToolType::Trace),
            "2" => Some(ToolType::ProfileDiff),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ToolType::Profile => "pprof",
            ToolType::Trace => "trace",
            ToolType::ProfileDiff => "pprof (compare)",
        }
    }

    /// Only the compare tool needs a second file
    pub fn requires_secondary_path(&self) -> bool {
        matches!(self, ToolType::ProfileDiff)
    }

    pub fn next(self) -> Self {
        match self {
            ToolType::Profile => ToolType::Trace,
            ToolType::Trace => ToolType::ProfileDiff,
            ToolType::ProfileDiff => ToolType::Profile,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ToolType::Profile => ToolType::ProfileDiff,
            ToolType::Trace => ToolType::Profile,
            ToolType::ProfileDiff => ToolType::Trace,
        }
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ToolType {
    type Err = Error;

    /// Accepts the wire digit or the config name
    fn from_str(s: &str) -> Result<Self> {
        if let Some(tool) = ToolType::from_wire(s) {
            return Ok(tool);
        }
        match s.to_ascii_lowercase().as_str() {
            "profile" | "pprof" => Ok(ToolType::Profile),
            "trace" => Ok(ToolType::Trace),
            "profile-diff" | "diff" | "compare" => Ok(ToolType::ProfileDiff),
            _ => Err(Error::config(format!("unknown tool type: {s}"))),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RegistryEntry
// ─────────────────────────────────────────────────────────────────────────────

/// One record of the list response, exactly as the service encodes it.
///
/// Unknown keys (the service also emits `Inst`) are ignored; missing or
/// mistyped keys fail deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WireEntry {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Path1")]
    pub path1: String,
    #[serde(rename = "Path2")]
    pub path2: String,
    #[serde(rename = "Port")]
    pub port: u64,
}

/// One row of the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    /// Project name shown in the first column
    pub name: String,
    /// Tool used to register it; unknown for rows that came from a list fetch
    pub tool: Option<ToolType>,
    pub path1: String,
    /// Absent unless the tool compares two files
    pub path2: Option<String>,
    /// Server-assigned port, the sole key for removal
    pub port: Port,
}

impl RegistryEntry {
    pub fn new(
        name: impl Into<String>,
        path1: impl Into<String>,
        path2: Option<String>,
        port: Port,
    ) -> Self {
        Self {
            name: name.into(),
            tool: None,
            path1: path1.into(),
            path2: path2.filter(|p| !p.is_empty()),
            port,
        }
    }

    pub fn with_tool(mut self, tool: ToolType) -> Self {
        self.tool = Some(tool);
        self
    }

    /// The one or two path lines shown for this row
    pub fn path_lines(&self) -> Vec<&str> {
        let mut lines = vec![self.path1.as_str()];
        if let Some(path2) = self.path2.as_deref() {
            lines.push(path2);
        }
        lines
    }
}

impl TryFrom<WireEntry> for RegistryEntry {
    type Error = Error;

    fn try_from(wire: WireEntry) -> Result<Self> {
        let port = u16::try_from(wire.port)
            .ok()
            .and_then(Port::new)
            .ok_or_else(|| Error::malformed(format!("entry '{}' has invalid port {}", wire.name, wire.port)))?;
        Ok(RegistryEntry::new(
            wire.name,
            wire.path1,
            Some(wire.path2),
            port,
        ))
    }
}
