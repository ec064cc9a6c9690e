//! Response envelope returned by the service calls the waiter drives.

use crate::lifecycle::HasLifecycleState;

/// Headers of a service response that callers commonly need.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHeaders {
    pub status: u16,
    pub opc_request_id: Option<String>,
    pub etag: Option<String>,
    pub opc_work_request_id: Option<String>,
}

/// A successful service response: headers plus the deserialized payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response<T> {
    pub headers: ResponseHeaders,
    pub data: T,
}

impl<T> Response<T> {
    pub fn new(status: u16, data: T) -> Self {
        Self {
            headers: ResponseHeaders {
                status,
                ..ResponseHeaders::default()
            },
            data,
        }
    }

    pub fn with_request_id(mut self, opc_request_id: impl Into<String>) -> Self {
        self.headers.opc_request_id = Some(opc_request_id.into());
        self
    }

    pub fn with_etag(mut self, etag: impl Into<String>) -> Self {
        self.headers.etag = Some(etag.into());
        self
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Response<U> {
        Response {
            headers: self.headers,
            data: f(self.data),
        }
    }
}

impl<T: HasLifecycleState> HasLifecycleState for Response<T> {
    fn lifecycle_state(&self) -> Option<&str> {
        self.data.lifecycle_state()
    }
}
