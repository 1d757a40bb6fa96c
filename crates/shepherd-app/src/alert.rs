//! Blocking warning dialog state

use shepherd_core::Error;

/// Message shown whenever the service is unreachable or answers empty
pub const SERVICE_UNAVAILABLE_MESSAGE: &str =
    "Oops...Seems that GoShepherd is not working well...Please check it!";

/// A modal warning. While one is open every key except dismiss is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertState {
    pub title: String,
    pub message: String,
}

impl AlertState {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn service_unavailable() -> Self {
        Self::new("Service unavailable", SERVICE_UNAVAILABLE_MESSAGE)
    }

    /// The service's own explanation, verbatim
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::new("Registration rejected", message)
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::new(
            "Unexpected response",
            format!(
                "The service sent a response that could not be read: {}",
                reason.into()
            ),
        )
    }
}

/// Why a background request failed, in a form messages can carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    ServiceUnavailable(String),
    Rejected(String),
    Malformed(String),
    Other(String),
}

impl RequestFailure {
    pub fn reason(&self) -> &str {
        match self {
            RequestFailure::ServiceUnavailable(r)
            | RequestFailure::Rejected(r)
            | RequestFailure::Malformed(r)
            | RequestFailure::Other(r) => r,
        }
    }

    /// The dialog the user sees for this failure
    pub fn alert(&self) -> AlertState {
        match self {
            RequestFailure::ServiceUnavailable(_) => AlertState::service_unavailable(),
            RequestFailure::Rejected(message) => AlertState::rejected(message.clone()),
            RequestFailure::Malformed(reason) => AlertState::malformed(reason.clone()),
            RequestFailure::Other(reason) => AlertState::new("Error", reason.clone()),
        }
    }
}

impl From<&Error> for RequestFailure {
    fn from(error: &Error) -> Self {
        match error {
            Error::ServiceUnavailable { reason } => Self::ServiceUnavailable(reason.clone()),
            Error::Rejected { message } => Self::Rejected(message.clone()),
            Error::MalformedResponse { reason } => Self::Malformed(reason.clone()),
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<Error> for RequestFailure {
    fn from(error: Error) -> Self {
        Self::from(&error)
    }
}
