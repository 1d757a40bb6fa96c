//! # shepherd-client - Registry Service Client
//!
//! Talks to a GoShepherd service: lists, adds and removes tool
//! registrations and uploads files for them.
//!
//! Depends on [`shepherd_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Protocol (`protocol`)
//! - [`ApiRequest`] - One `op=` call and its query parameters
//! - [`AddRequest`], [`UploadRequest`] - Registration and upload parameters
//! - [`AddOutcome`] - Classified `add` response (assigned / rejected / service down)
//! - [`decode_add()`], [`decode_list()`], [`decode_upload()`] - Boundary decoders
//!
//! ### Client (`client`)
//! - [`RegistryClient`] - Async client trait (Send futures)
//! - [`HttpRegistryClient`] - reqwest implementation

pub mod client;
pub mod protocol;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Public API re-exports
pub use client::{HttpRegistryClient, LocalRegistryClient, RegistryClient};
pub use protocol::{
    decode_add, decode_list, decode_upload, AddOutcome, AddRequest, ApiRequest, UploadRequest,
};
