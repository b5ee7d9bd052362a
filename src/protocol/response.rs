//! Response definitions
//!
//! Represents responses to the editor and the outcome handed to the
//! transport.

use bytes::Bytes;

use crate::error::DocError;
use super::DocumentContent;

/// Successful load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadResponse {
    pub content: DocumentContent,
}

/// Successful save (acknowledgement only)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveResponse;

/// Body sent back on any failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    /// Stable error kind, e.g. `not_found`
    pub error: String,

    /// Human readable description
    pub message: String,
}

impl From<&DocError> for ErrorBody {
    fn from(err: &DocError) -> Self {
        Self {
            error: err.kind().to_string(),
            message: err.client_message(),
        }
    }
}

/// Outcome status, mapped to a protocol status by the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    BadRequest,
    NotFound,
    Error,
}

impl Status {
    pub fn for_error(err: &DocError) -> Self {
        match err {
            DocError::Decode(_) | DocError::InvalidLocator(_) => Status::BadRequest,
            DocError::NotFound { .. } => Status::NotFound,
            _ => Status::Error,
        }
    }

    pub fn is_success(self) -> bool {
        self == Status::Ok
    }
}

/// A completed request: status plus encoded body
#[derive(Debug, Clone)]
pub struct Outcome {
    pub status: Status,
    pub body: Bytes,
}

impl Outcome {
    /// Create a successful outcome with an encoded body
    pub fn ok(body: Vec<u8>) -> Self {
        Self {
            status: Status::Ok,
            body: Bytes::from(body),
        }
    }

    /// Create a failure outcome describing `err`
    pub fn failure(err: &DocError) -> Self {
        Self {
            status: Status::for_error(err),
            body: Bytes::from(super::encode_error(&ErrorBody::from(err))),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
