//! Application error types

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Registry Service Errors
    // ─────────────────────────────────────────────────────────────
    /// Empty response body or transport failure: the service is presumed down.
    #[error("Registry service unavailable: {reason}")]
    ServiceUnavailable { reason: String },

    /// The service refused a registration and said why.
    #[error("{message}")]
    Rejected { message: String },

    /// The service answered with something that does not fit the protocol.
    #[error("Malformed registry response: {reason}")]
    MalformedResponse { reason: String },

    #[error("Upload failed: {reason}")]
    Upload { reason: String },

    #[error("Invalid service endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn service_unavailable(reason: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            reason: reason.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }

    pub fn upload(reason: impl Into<String>) -> Self {
        Self::Upload {
            reason: reason.into(),
        }
    }

    pub fn invalid_endpoint(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEndpoint {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::service_unavailable("connection refused");
        assert_eq!(
            err.to_string(),
            "Registry service unavailable: connection refused"
        );

        let err = Error::malformed("expected array");
        assert!(err.to_string().contains("expected array"));
    }

    #[test]
    fn test_rejected_displays_message_verbatim() {
        let err = Error::rejected("name already exists");
        assert_eq!(err.to_string(), "name already exists");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_invalid_endpoint_names_the_url() {
        let err = Error::invalid_endpoint("http://", "missing host");
        assert_eq!(
            err.to_string(),
            "Invalid service endpoint 'http://': missing host"
        );
    }
}
