// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for message bus events.
//!
//! This module contains message types for logging events related to:
//! * Messages appended to the bus
//! * Malformed diagnostic records discarded during a batch add
//! * Record fields of the wrong kind ignored during hydration
//! * Bus clearing
//! * Listener registration

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Messages appended to the bus.
///
/// # Log Level
/// `debug!` - Routine state change
///
/// # Example
/// ```
/// use the_bulletin::observability::messages::bus::MessagesAdded;
///
/// let msg = MessagesAdded {
///     added: 2,
///     total: 5,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct MessagesAdded {
    pub added: usize,
    pub total: usize,
}

impl Display for MessagesAdded {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Added {} message(s) to the bus: {} message(s) live",
            self.added, self.total
        )
    }
}

impl StructuredLog for MessagesAdded {
    fn log(&self) {
        tracing::debug!(added = self.added, total = self.total, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "messages_added",
            span_name = name,
            added = self.added,
            total = self.total,
        )
    }
}

/// Diagnostic records discarded because they lacked text or a known severity.
///
/// # Log Level
/// `warn!` - The service sent something the client cannot display
///
/// # Example
/// ```
/// use the_bulletin::observability::messages::bus::MalformedMessagesDropped;
///
/// let msg = MalformedMessagesDropped {
///     dropped: 1,
///     received: 4,
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct MalformedMessagesDropped {
    pub dropped: usize,
    pub received: usize,
}

impl Display for MalformedMessagesDropped {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Dropped {} of {} diagnostic record(s) missing text or severity",
            self.dropped, self.received
        )
    }
}

impl StructuredLog for MalformedMessagesDropped {
    fn log(&self) {
        tracing::warn!(dropped = self.dropped, received = self.received, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "malformed_messages_dropped",
            span_name = name,
            dropped = self.dropped,
            received = self.received,
        )
    }
}

/// A record field held a value of the wrong kind and was left unset.
///
/// # Log Level
/// `warn!` - The record is kept, minus the field
///
/// # Example
/// ```
/// use the_bulletin::observability::messages::bus::MalformedFieldIgnored;
///
/// let msg = MalformedFieldIgnored {
///     field: "entityKey",
///     found: "\"12\"".to_string(),
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct MalformedFieldIgnored {
    pub field: &'static str,
    pub found: String,
}

impl Display for MalformedFieldIgnored {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Ignored diagnostic field {} with unexpected value {}", self.field, self.found)
    }
}

impl StructuredLog for MalformedFieldIgnored {
    fn log(&self) {
        tracing::warn!(field = self.field, found = %self.found, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "malformed_field_ignored",
            span_name = name,
            field = self.field,
            found = %self.found,
        )
    }
}

/// The bus was emptied.
///
/// # Log Level
/// `debug!` - Routine state change
pub struct MessagesCleared {
    pub removed: usize,
}

impl Display for MessagesCleared {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Cleared {} message(s) from the bus", self.removed)
    }
}

impl StructuredLog for MessagesCleared {
    fn log(&self) {
        tracing::debug!(removed = self.removed, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("messages_cleared", span_name = name, removed = self.removed)
    }
}

/// A listener registration replaced an earlier one.
///
/// # Log Level
/// `debug!` - Only one listener is ever active
pub struct ListenerReplaced;

impl Display for ListenerReplaced {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Message listener replaced; the previous listener will no longer be notified")
    }
}

impl StructuredLog for ListenerReplaced {
    fn log(&self) {
        tracing::debug!("{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("listener_replaced", span_name = name)
    }
}
