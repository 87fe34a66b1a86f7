// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Splits service responses into payload and diagnostics.
//!
//! Every response body carries a reserved `messages` envelope next to its
//! payload. Processing removes the envelope, pushes its records onto the
//! message bus, and decides pass/fail from `maxSeverity` alone: a transport
//! success whose envelope reports ERROR, SYSTEM or an unknown severity is still
//! a failed call.

use serde_json::Value;

use crate::diagnostics::{MessageBus, MessageEnvelope, SharedMessageBus, MESSAGES_KEY};
use crate::errors::ResponseError;
use crate::observability::messages::remote::{EnvelopeMissing, ResponseProcessed, SeverityEscalated};
use crate::observability::messages::StructuredLog;

/// Routes response diagnostics to a shared bus.
#[derive(Debug, Clone)]
pub struct ResponseProcessor {
    bus: SharedMessageBus,
}

impl ResponseProcessor {
    pub fn new(bus: SharedMessageBus) -> Self {
        Self { bus }
    }

    pub fn bus(&self) -> &SharedMessageBus {
        &self.bus
    }

    /// Process one response body and return its payload without the envelope.
    ///
    /// The bus stays locked for the whole step, so the diagnostics of two
    /// responses are never interleaved.
    pub async fn process(&self, body: Value) -> Result<Value, ResponseError> {
        let mut bus = self.bus.lock().await;
        process_response(&mut bus, body)
    }
}

/// Synchronous core of [`ResponseProcessor::process`] for callers that already
/// own the bus.
///
/// # Example
/// ```
/// use serde_json::json;
/// use the_bulletin::diagnostics::MessageBus;
/// use the_bulletin::remote::process_response;
///
/// let mut bus = MessageBus::new();
/// let body = json!({
///     "id": 7,
///     "messages": { "list": [{ "text": "Saved", "severity": "INFO" }], "maxSeverity": "INFO" }
/// });
///
/// let payload = process_response(&mut bus, body)?;
/// assert_eq!(payload, json!({ "id": 7 }));
/// assert_eq!(bus.len(), 1);
/// # Ok::<(), the_bulletin::errors::ResponseError>(())
/// ```
pub fn process_response(bus: &mut MessageBus, mut body: Value) -> Result<Value, ResponseError> {
    let raw_envelope = match body.as_object_mut().and_then(|fields| fields.remove(MESSAGES_KEY)) {
        Some(Value::Null) | None => {
            EnvelopeMissing.log();
            return Err(ResponseError::MissingMessages);
        }
        Some(raw) => raw,
    };

    let envelope: MessageEnvelope =
        serde_json::from_value(raw_envelope).map_err(ResponseError::MalformedEnvelope)?;

    bus.add_messages(envelope.records())?;

    let message_count = envelope.records().len();
    if envelope.is_error() {
        SeverityEscalated {
            max_severity: envelope.max_severity(),
            message_count,
        }
        .log();

        return Err(ResponseError::SeverityEscalation {
            max_severity: envelope.max_severity().map(str::to_string),
        });
    }

    ResponseProcessed {
        max_severity: envelope.max_severity().unwrap_or_default(),
        message_count,
    }
    .log();

    Ok(body)
}
