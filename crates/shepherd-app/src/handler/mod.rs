//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `submit`: Registration form and upload handlers
//! - `registry`: List fetch and row removal handlers

pub(crate) mod keys;
pub(crate) mod registry;
pub(crate) mod submit;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use shepherd_client::{AddRequest, UploadRequest};
use shepherd_core::Port;

use crate::message::Message;
use crate::registry_view::FetchTicket;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Fetch the registry; the response is matched against `ticket`
    FetchRegistry { ticket: FetchTicket },

    /// Spawn a background request
    SpawnTask(Task),
}

/// Background requests against the registry service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Register a tool
    Add(AddRequest),
    /// Unregister a port; the row is already gone locally
    Remove(Port),
    /// Upload a file, then submit the form with its stored path
    Upload(UploadRequest),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
