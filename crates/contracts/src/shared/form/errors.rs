use std::collections::BTreeMap;
use thiserror::Error;

/// Field name -> message for every failed field
pub type FieldErrors = BTreeMap<String, String>;

/// Errors raised by the form itself, before any request is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{} required field(s) missing", .0.len())]
    Validation(FieldErrors),

    #[error("a submission is already in progress")]
    AlreadySubmitting,

    /// Inputs are disabled while loading, submitting or after the form closed
    #[error("the form is not editable right now")]
    Locked,

    #[error("unknown field: {0}")]
    UnknownField(String),
}

/// Any non-success response or transport failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("not found")]
    NotFound { message: Option<String> },

    #[error("HTTP {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("failed to parse response: {0}")]
    Decode(String),

    #[error("request timed out")]
    Timeout,
}

impl RequestError {
    /// Message reported by the collaborator, if it sent one
    pub fn reported_message(&self) -> Option<&str> {
        match self {
            RequestError::Status {
                message: Some(m), ..
            }
            | RequestError::NotFound { message: Some(m) } if !m.trim().is_empty() => Some(m),
            _ => None,
        }
    }
}
