//! Scripted registry client for tests
//!
//! Available with the `test-helpers` feature so downstream crates can drive
//! the application layer without a live service.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use shepherd_core::prelude::*;
use shepherd_core::{Port, RegistryEntry};

use crate::client::RegistryClient;
use crate::protocol::{AddOutcome, AddRequest, UploadRequest};

/// A request the scripted client received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedRequest {
    List,
    Add(AddRequest),
    Remove(Port),
    Upload(UploadRequest),
}

#[derive(Default)]
struct Script {
    list: VecDeque<Result<Vec<RegistryEntry>>>,
    add: VecDeque<Result<AddOutcome>>,
    remove: VecDeque<Result<()>>,
    upload: VecDeque<Result<String>>,
    requests: Vec<RecordedRequest>,
}

/// [`RegistryClient`] that replays queued responses and records every call.
///
/// When a queue runs dry: `list` returns an empty registry, `remove`
/// succeeds, and `add`/`upload` report the service as unavailable.
#[derive(Clone, Default)]
pub struct ScriptedClient {
    script: Arc<Mutex<Script>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_list(&self, response: Result<Vec<RegistryEntry>>) -> &Self {
        self.lock().list.push_back(response);
        self
    }

    pub fn push_add(&self, response: Result<AddOutcome>) -> &Self {
        self.lock().add.push_back(response);
        self
    }

    pub fn push_remove(&self, response: Result<()>) -> &Self {
        self.lock().remove.push_back(response);
        self
    }

    pub fn push_upload(&self, response: Result<String>) -> &Self {
        self.lock().upload.push_back(response);
        self
    }

    /// Every request received so far, in order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl RegistryClient for ScriptedClient {
    async fn list(&self) -> Result<Vec<RegistryEntry>> {
        let mut script = self.lock();
        script.requests.push(RecordedRequest::List);
        script.list.pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn add(&self, request: AddRequest) -> Result<AddOutcome> {
        let mut script = self.lock();
        script.requests.push(RecordedRequest::Add(request));
        script
            .add
            .pop_front()
            .unwrap_or_else(|| Err(Error::service_unavailable("no scripted add response")))
    }

    async fn remove(&self, port: Port) -> Result<()> {
        let mut script = self.lock();
        script.requests.push(RecordedRequest::Remove(port));
        script.remove.pop_front().unwrap_or(Ok(()))
    }

    async fn upload(&self, request: UploadRequest) -> Result<String> {
        let mut script = self.lock();
        script.requests.push(RecordedRequest::Upload(request));
        script
            .upload
            .pop_front()
            .unwrap_or_else(|| Err(Error::service_unavailable("no scripted upload response")))
    }
}
