// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for remote calls and response processing.
//!
//! This module contains message types for logging events related to:
//! * Remote call lifecycle (start, failure)
//! * Responses without a messages envelope
//! * Severity escalation of completed calls
//! * Successful response processing

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Remote call started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_bulletin::observability::messages::remote::RemoteCallStarted;
///
/// let msg = RemoteCallStarted {
///     method: "GET",
///     url: "http://localhost:8080/rs/users",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct RemoteCallStarted<'a> {
    pub method: &'a str,
    pub url: &'a str,
}

impl Display for RemoteCallStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Remote call started: {} {}", self.method, self.url)
    }
}

impl StructuredLog for RemoteCallStarted<'_> {
    fn log(&self) {
        tracing::info!(method = self.method, url = self.url, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "remote_call",
            span_name = name,
            method = self.method,
            url = self.url,
        )
    }
}

/// Remote call failed, at the transport or after escalation.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use the_bulletin::observability::messages::remote::RemoteCallFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "connection reset");
/// let msg = RemoteCallFailed {
///     url: "http://localhost:8080/rs/users",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct RemoteCallFailed<'a> {
    pub url: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for RemoteCallFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Remote call to {} failed: {}", self.url, self.error)
    }
}

impl StructuredLog for RemoteCallFailed<'_> {
    fn log(&self) {
        tracing::error!(url = self.url, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "remote_call_failed",
            span_name = name,
            url = self.url,
            error = %self.error,
        )
    }
}

/// A response arrived without a messages envelope.
///
/// # Log Level
/// `error!` - Client and service disagree on the protocol
pub struct EnvelopeMissing;

impl Display for EnvelopeMissing {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Response has no messages envelope; client and service are incompatible")
    }
}

impl StructuredLog for EnvelopeMissing {
    fn log(&self) {
        tracing::error!("{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("envelope_missing", span_name = name)
    }
}

/// A completed call was turned into a failure by its diagnostics.
///
/// # Log Level
/// `warn!` - The service rejected the request
///
/// # Example
/// ```
/// use the_bulletin::observability::messages::remote::SeverityEscalated;
///
/// let msg = SeverityEscalated {
///     max_severity: Some("ERROR"),
///     message_count: 2,
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct SeverityEscalated<'a> {
    pub max_severity: Option<&'a str>,
    pub message_count: usize,
}

impl Display for SeverityEscalated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Response escalated to failure: maxSeverity={}, {} message(s)",
            self.max_severity.unwrap_or("<absent>"),
            self.message_count
        )
    }
}

impl StructuredLog for SeverityEscalated<'_> {
    fn log(&self) {
        tracing::warn!(
            max_severity = self.max_severity.unwrap_or("<absent>"),
            message_count = self.message_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "severity_escalated",
            span_name = name,
            max_severity = self.max_severity.unwrap_or("<absent>"),
            message_count = self.message_count,
        )
    }
}

/// A response was split into payload and diagnostics without escalation.
///
/// # Log Level
/// `debug!` - Routine event
pub struct ResponseProcessed<'a> {
    pub max_severity: &'a str,
    pub message_count: usize,
}

impl Display for ResponseProcessed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Response processed: maxSeverity={}, {} message(s)",
            self.max_severity, self.message_count
        )
    }
}

impl StructuredLog for ResponseProcessed<'_> {
    fn log(&self) {
        tracing::debug!(
            max_severity = self.max_severity,
            message_count = self.message_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "response_processed",
            span_name = name,
            max_severity = self.max_severity,
            message_count = self.message_count,
        )
    }
}
