//! Error types for the lakehouse client.
//!
//! # Design
//! Validation failures are raised before any network activity and carry the
//! offending field. Everything the transport reports is passed through:
//! connection failures keep their original source, and non-2xx responses keep
//! the raw status and body.

use crate::http::TransportError;

/// Which validation rule a parameter object broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    MissingRequired,
    Unrecognized,
}

impl ValidationErrorKind {
    pub const fn message(self) -> &'static str {
        match self {
            ValidationErrorKind::MissingRequired => "missing required parameter",
            ValidationErrorKind::Unrecognized => "unrecognized parameter",
        }
    }
}

/// A parameter object rejected by the validator.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{}: {field}", .kind.message())]
pub struct ValidationError {
    pub field: String,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: ValidationErrorKind::MissingRequired,
        }
    }

    pub fn unrecognized(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: ValidationErrorKind::Unrecognized,
        }
    }
}

/// Errors returned by `LakehouseClient` and `LakehouseService`.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// The parameter object failed validation. No request was sent.
    #[error("invalid parameters: {0}")]
    Validation(#[from] ValidationError),

    /// The transport failed to complete the exchange.
    #[error("transport error: {0}")]
    Transport(#[source] TransportError),

    /// The service answered with a non-2xx status.
    #[error("HTTP {status} {status_text}: {body}")]
    Http {
        status: u16,
        status_text: String,
        body: String,
    },

    /// Parameters could not be converted into a request payload.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be decoded into the requested shape.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The client configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// The validation error, if this is one.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            ApiError::Validation(err) => Some(err),
            _ => None,
        }
    }

    /// HTTP status for `Http` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T, E = ApiError> = std::result::Result<T, E>;
