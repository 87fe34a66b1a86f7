// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for response processing and remote calls.

use super::EntityError;
use thiserror::Error;

/// Fixed description carried by a severity escalation.
pub const SEVERITY_ESCALATION_DESCRIPTION: &str = "message severity of ERROR or higher";

/// Failures produced while splitting a response into payload and diagnostics.
#[derive(Error, Debug)]
pub enum ResponseError {
    /// The response carried no `messages` envelope at all.
    #[error("response does not contain a messages envelope")]
    MissingMessages,

    /// The `messages` field exists but does not have the `{list, maxSeverity}` shape.
    #[error("malformed messages envelope: {0}")]
    MalformedEnvelope(#[source] serde_json::Error),

    /// A diagnostic record could not be hydrated into a message.
    #[error("diagnostic record rejected: {0}")]
    Entity(#[from] EntityError),

    /// The remote call completed but reported ERROR, SYSTEM or an unknown severity.
    #[error("{}", SEVERITY_ESCALATION_DESCRIPTION)]
    SeverityEscalation { max_severity: Option<String> },
}

impl ResponseError {
    /// True when the call reached the service but the service reported failure.
    pub fn is_escalation(&self) -> bool {
        matches!(self, ResponseError::SeverityEscalation { .. })
    }
}

/// Failures reported by a `Transport` implementation.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no resource at {url}")]
    NotFound { url: String },

    #[error("request to {url} rejected: {reason}")]
    Rejected { url: String, reason: String },

    #[error("response body from {url} is not JSON: {source}")]
    InvalidBody {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The outcome of a failed remote call as seen by its caller.
#[derive(Error, Debug)]
pub enum CallError {
    #[error(transparent)]
    Response(#[from] ResponseError),

    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The task routing the response stopped before finishing.
    #[error("remote call aborted: {0}")]
    Aborted(String),

    /// The stripped payload did not have the shape the caller asked for.
    #[error("unexpected payload: {0}")]
    Payload(#[source] serde_json::Error),
}
