//! Registry client: the request/response layer over HTTP
//!
//! [`RegistryClient`] is the seam the application layer depends on.
//! [`HttpRegistryClient`] is the production implementation backed by reqwest.
//! It is stateless apart from its connection pool and clones cheaply.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use shepherd_core::prelude::*;
use shepherd_core::{Port, RegistryEntry, ServiceEndpoint};

use crate::protocol::{
    decode_add, decode_list, decode_upload, AddOutcome, AddRequest, ApiRequest, UploadRequest,
};

/// Operations against a GoShepherd service
#[trait_variant::make(RegistryClient: Send)]
pub trait LocalRegistryClient {
    /// Fetch every registered tool
    async fn list(&self) -> Result<Vec<RegistryEntry>>;

    /// Register a tool and classify the answer
    async fn add(&self, request: AddRequest) -> Result<AddOutcome>;

    /// Unregister the tool on `port`; the response body is ignored
    async fn remove(&self, port: Port) -> Result<()>;

    /// Upload a local file and return the path the service stored it at
    async fn upload(&self, request: UploadRequest) -> Result<String>;
}

/// [`RegistryClient`] speaking HTTP to a live service
#[derive(Debug, Clone)]
pub struct HttpRegistryClient {
    http: reqwest::Client,
    endpoint: ServiceEndpoint,
}

impl HttpRegistryClient {
    /// Create a client. `timeout` of `None` waits indefinitely.
    pub fn new(endpoint: ServiceEndpoint, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &ServiceEndpoint {
        &self.endpoint
    }

    /// Issue one API call and return the raw body.
    ///
    /// Transport failures and non-success statuses mean the service is unavailable.
    async fn call(&self, request: &ApiRequest) -> Result<String> {
        let url = self.endpoint.api_url()?;
        debug!("GET {} op={}", url, request.op());

        let response = self
            .http
            .get(url)
            .query(&request.query_pairs())
            .send()
            .await
            .map_err(|e| Error::service_unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::service_unavailable(format!("HTTP {}", status)));
        }

        response
            .text()
            .await
            .map_err(|e| Error::service_unavailable(format!("Failed to read body: {}", e)))
    }
}

impl RegistryClient for HttpRegistryClient {
    async fn list(&self) -> Result<Vec<RegistryEntry>> {
        let body = self.call(&ApiRequest::List).await?;
        let entries = decode_list(&body)?;
        debug!("Listed {} registry entries", entries.len());
        Ok(entries)
    }

    async fn add(&self, request: AddRequest) -> Result<AddOutcome> {
        let name = request.name.clone();
        let body = self.call(&ApiRequest::Add(request)).await?;
        let outcome = decode_add(&body)?;
        match &outcome {
            AddOutcome::Assigned(port) => info!("Registered '{}' on port {}", name, port),
            AddOutcome::Rejected(message) => warn!("Registration of '{}' rejected: {}", name, message),
            AddOutcome::ServiceDown => warn!("Registration of '{}' got an empty response", name),
        }
        Ok(outcome)
    }

    async fn remove(&self, port: Port) -> Result<()> {
        self.call(&ApiRequest::Remove(port)).await?;
        info!("Removed registration on port {}", port);
        Ok(())
    }

    async fn upload(&self, request: UploadRequest) -> Result<String> {
        let bytes = tokio::fs::read(&request.file).await.map_err(|e| {
            Error::upload(format!("Cannot read {}: {}", request.file.display(), e))
        })?;
        let file_name = request
            .file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let form = Form::new()
            .text("proName", request.project_name.clone())
            .part("file", Part::bytes(bytes).file_name(file_name));

        let url = self.endpoint.upload_url()?;
        debug!("POST {} ({})", url, request.file.display());

        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::service_unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::upload(format!("HTTP {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::upload(format!("Failed to read body: {}", e)))?;
        let path = decode_upload(&body)?;
        info!("Uploaded {} to {}", request.file.display(), path);
        Ok(path)
    }
}
