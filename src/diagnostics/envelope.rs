// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The `{list, maxSeverity}` wrapper carried by every service response.

use crate::diagnostics::message::Message;
use crate::diagnostics::severity::{CompletionStatus, Severity};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key of the envelope inside a response body.
pub const MESSAGES_KEY: &str = "messages";

/// Envelope as received from a service. Records stay loosely typed until the
/// bus hydrates them; `maxSeverity` stays a raw label so unknown values can
/// fail closed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEnvelope {
    #[serde(default)]
    list: Option<Vec<Value>>,
    #[serde(default)]
    max_severity: Option<String>,
}

impl MessageEnvelope {
    pub fn new(list: Vec<Value>, max_severity: Option<String>) -> Self {
        Self {
            list: Some(list),
            max_severity,
        }
    }

    pub fn records(&self) -> &[Value] {
        self.list.as_deref().unwrap_or_default()
    }

    pub fn max_severity(&self) -> Option<&str> {
        self.max_severity.as_deref()
    }

    /// True when the envelope reports ERROR, SYSTEM, or a severity that cannot
    /// be resolved.
    pub fn is_error(&self) -> bool {
        Severity::is_error_severity(self.max_severity())
    }

    pub fn completion_status(&self) -> CompletionStatus {
        CompletionStatus::from_max_severity(self.max_severity())
    }
}

/// Envelope built from live messages, in the same wire shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeSnapshot {
    pub list: Vec<Message>,
    pub max_severity: Severity,
}

impl EnvelopeSnapshot {
    /// The maximum severity starts at INFO and rises with each message.
    pub fn from_messages(messages: &[Message]) -> Self {
        let max_severity = messages
            .iter()
            .map(Message::severity)
            .max()
            .unwrap_or(Severity::Info);

        Self {
            list: messages.to_vec(),
            max_severity,
        }
    }
}
