//! Request-level options passed through, untouched, to every service call a
//! composite operation makes.

use std::time::Duration;

/// Retry behaviour requested from the underlying HTTP layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub base_sleep: Duration,
    pub max_sleep: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 8,
            base_sleep: Duration::from_secs(1),
            max_sleep: Duration::from_secs(30),
        }
    }
}

impl RetryConfig {
    /// A single attempt, no retries.
    pub fn disabled() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub opc_request_id: Option<String>,
    pub opc_retry_token: Option<String>,
    pub if_match: Option<String>,
    pub retry: Option<RetryConfig>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_request_id(mut self, opc_request_id: impl Into<String>) -> Self {
        self.opc_request_id = Some(opc_request_id.into());
        self
    }

    pub fn with_retry_token(mut self, opc_retry_token: impl Into<String>) -> Self {
        self.opc_retry_token = Some(opc_retry_token.into());
        self
    }

    pub fn with_if_match(mut self, etag: impl Into<String>) -> Self {
        self.if_match = Some(etag.into());
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = Some(retry);
        self
    }
}
