//! Error taxonomy shared by service calls and waits.

use std::time::Duration;
use thiserror::Error;

/// A failure reported by a service call (mutate, get or poll).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request parameters were rejected before any network call was made.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The service answered with an error status.
    #[error("Service error {status} ({code}): {message}")]
    Service {
        status: u16,
        code: String,
        message: String,
        opc_request_id: Option<String>,
    },

    /// The request never produced a service response.
    #[error("Network error: {0}")]
    Network(String),
}

impl ApiError {
    pub fn service(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Service {
            status,
            code: code.into(),
            message: message.into(),
            opc_request_id: None,
        }
    }

    /// The 404 the services return for a resource that no longer exists.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::service(404, "NotAuthorizedOrNotFound", message)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Service { status, .. } => Some(*status),
            Self::Validation(_) | Self::Network(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Whether retrying the same call later can succeed.
    ///
    /// Network failures, throttling (429), `IncorrectState` conflicts (409) and
    /// server-side errors (5xx other than 501) are transient. Everything else
    /// is definitive.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Validation(_) => false,
            Self::Service { status, code, .. } => match *status {
                409 => code.as_str() == "IncorrectState",
                429 => true,
                501 => false,
                500..=599 => true,
                _ => false,
            },
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Why a wait ended without its condition being met.
#[derive(Debug, Error)]
pub enum WaitError {
    /// The total wait budget ran out before the condition held.
    #[error("Maximum wait time of {max_wait:?} exceeded after {polls} polls ({elapsed:?} elapsed)")]
    TimedOut {
        max_wait: Duration,
        elapsed: Duration,
        polls: u32,
        /// The transient error of the final poll, if that poll failed.
        last_error: Option<ApiError>,
    },

    /// The polled resource does not exist and not-found was not acceptable.
    #[error("Resource not found while waiting: {0}")]
    NotFound(#[source] ApiError),

    /// A poll failed with a definitive error.
    #[error("Polling failed: {0}")]
    Poll(#[source] ApiError),

    #[error("Wait cancelled after {polls} polls")]
    Cancelled { polls: u32 },
}

impl WaitError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::TimedOut { .. })
    }
}

pub type WaitResult<T> = Result<T, WaitError>;

/// Invalid waiter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {name}: {reason}")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },
}
