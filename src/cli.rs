//! Scripting subcommands
//!
//! Each command runs one request through the same client and response
//! classification the TUI uses, writing results to `out`. Rejections and
//! service failures come back as errors so the binary exits non-zero.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Subcommand;
use shepherd_app::config;
use shepherd_app::SERVICE_UNAVAILABLE_MESSAGE;
use shepherd_client::{AddOutcome, AddRequest, RegistryClient, UploadRequest};
use shepherd_core::prelude::*;
use shepherd_core::{Port, ServiceEndpoint, ToolType};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print every registered tool
    List,

    /// Register a tool
    Add {
        /// profile, trace, profile-diff (or 0, 1, 2)
        #[arg(long, default_value = "profile")]
        tool: ToolType,

        /// Project name
        #[arg(long)]
        name: String,

        /// Primary file path on the service host
        #[arg(long)]
        path1: String,

        /// Base file path, only used by profile-diff
        #[arg(long, default_value = "")]
        path2: String,
    },

    /// Unregister the tool on a port
    Remove {
        #[arg(long)]
        port: Port,
    },

    /// Upload a local file, then register the stored copy
    Upload {
        file: PathBuf,

        /// Project name; defaults to the file stem
        #[arg(long)]
        name: Option<String>,

        #[arg(long, default_value = "profile")]
        tool: ToolType,

        /// Base file path, only used by profile-diff
        #[arg(long, default_value = "")]
        path2: String,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Write a default config file if none exists
    Init,
}

/// Print the registry as tab separated `name url port path1 [path2]` lines
pub async fn list<C: RegistryClient, W: Write>(
    client: &C,
    endpoint: &ServiceEndpoint,
    out: &mut W,
) -> Result<()> {
    let entries = client.list().await?;
    for entry in &entries {
        let paths = entry.path_lines().join("\t");
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            entry.name,
            endpoint.access_url(entry.port),
            entry.port,
            paths
        )?;
    }
    Ok(())
}

/// Register a tool and print the assigned port and access URL
pub async fn add<C: RegistryClient, W: Write>(
    client: &C,
    endpoint: &ServiceEndpoint,
    request: AddRequest,
    out: &mut W,
) -> Result<Port> {
    validate(&request)?;
    match client.add(request).await? {
        AddOutcome::Assigned(port) => {
            writeln!(out, "{}\t{}", port, endpoint.access_url(port))?;
            Ok(port)
        }
        AddOutcome::Rejected(message) => Err(Error::rejected(message)),
        AddOutcome::ServiceDown => Err(Error::service_unavailable(SERVICE_UNAVAILABLE_MESSAGE)),
    }
}

pub async fn remove<C: RegistryClient, W: Write>(client: &C, port: Port, out: &mut W) -> Result<()> {
    client.remove(port).await?;
    writeln!(out, "removed {}", port)?;
    Ok(())
}

/// Upload `file` and register the path the service stored it at
pub async fn upload<C: RegistryClient, W: Write>(
    client: &C,
    endpoint: &ServiceEndpoint,
    file: &Path,
    name: Option<String>,
    tool: ToolType,
    path2: &str,
    out: &mut W,
) -> Result<Port> {
    if tool.requires_secondary_path() && path2.trim().is_empty() {
        return Err(Error::config("--path2 is required for profile-diff"));
    }
    let name = match name {
        Some(name) => name,
        None => file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| Error::upload(format!("cannot derive a name from {}", file.display())))?,
    };

    let stored = client
        .upload(UploadRequest {
            file: file.to_path_buf(),
            project_name: name.clone(),
        })
        .await?;
    debug!("Stored upload at {}", stored);

    add(client, endpoint, AddRequest::new(tool, name, stored, path2), out).await
}

/// Write the default config file; prints where it went
pub fn config_init<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    if config::init_config_file(path)? {
        writeln!(out, "Wrote {}", path.display())?;
    } else {
        writeln!(out, "{} already exists", path.display())?;
    }
    Ok(())
}

/// Same required-field checks as the form
fn validate(request: &AddRequest) -> Result<()> {
    if request.name.trim().is_empty() {
        return Err(Error::config("--name must not be empty"));
    }
    if request.path1.trim().is_empty() {
        return Err(Error::config("--path1 must not be empty"));
    }
    if request.tool.requires_secondary_path() && request.path2.is_empty() {
        return Err(Error::config("--path2 is required for profile-diff"));
    }
    Ok(())
}
