//! # shepherd-core - Core Domain Types
//!
//! Foundation crate for the GoShepherd client. Provides registry domain
//! types, the service endpoint, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, url).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`RegistryEntry`] - One registered tool: name, paths and assigned port
//! - [`WireEntry`] - A list-response record as the service encodes it
//! - [`ToolType`] - Which Go tool a registration starts
//! - [`Port`] - Non-zero port assigned by the service
//!
//! ### Endpoint (`endpoint`)
//! - [`ServiceEndpoint`] - Service base URL, API/upload URLs, access URLs
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum, one variant family per layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use shepherd_core::prelude::*;
//! ```

pub mod endpoint;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all GoShepherd client crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use endpoint::{ServiceEndpoint, DEFAULT_API_PATH, DEFAULT_SERVICE_URL, DEFAULT_UPLOAD_PATH};
pub use error::{Error, Result};
pub use types::{normalize_path2, Port, RegistryEntry, ToolType, WireEntry, PATH2_PLACEHOLDER};
