// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Central aggregation point for diagnostic messages.
//!
//! The bus owns the live, ordered set of [`Message`]s and notifies a single
//! listener with the complete set after every mutation. Consumers re-render
//! from each snapshot; they never receive deltas.
//!
//! # Example
//! ```
//! use std::sync::{Arc, Mutex};
//! use the_bulletin::diagnostics::{MessageBus, Severity};
//!
//! let seen = Arc::new(Mutex::new(0));
//! let sink = seen.clone();
//!
//! let mut bus = MessageBus::new();
//! bus.set_message_listener(move |messages| *sink.lock().unwrap() = messages.len());
//! bus.add_message("Saved", Severity::Info);
//!
//! assert_eq!(*seen.lock().unwrap(), 1);
//! ```

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;

use crate::diagnostics::envelope::EnvelopeSnapshot;
use crate::diagnostics::hydrate::hydrate;
use crate::diagnostics::message::{Message, MessageBuilder};
use crate::diagnostics::severity::Severity;
use crate::errors::EntityError;
use crate::observability::messages::bus::*;
use crate::observability::messages::StructuredLog;

/// Receives the full, ordered message set after each mutation.
pub type MessageListener = Box<dyn FnMut(&[Message]) + Send>;

/// A bus shared between the UI owner and the response-processing path.
///
/// Holding the lock for the duration of one response's processing keeps the
/// bus writes of different responses from interleaving.
pub type SharedMessageBus = Arc<Mutex<MessageBus>>;

#[derive(Default)]
pub struct MessageBus {
    messages: Vec<Message>,
    listener: Option<MessageListener>,
    last_sequence: i64,
}

impl MessageBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the bus for use across tasks.
    pub fn shared(self) -> SharedMessageBus {
        Arc::new(Mutex::new(self))
    }

    /// Register the single active listener. The last registration wins.
    pub fn set_message_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&[Message]) + Send + 'static,
    {
        if self.listener.is_some() {
            ListenerReplaced.log();
        }
        self.listener = Some(Box::new(listener));
    }

    /// Append one message without entity correlation.
    pub fn add_message(&mut self, text: impl Into<String>, severity: Severity) {
        self.add_entity_message(text, severity, None, None, None);
    }

    /// Append one message, optionally correlated to a field of an entity
    /// instance. The caller is responsible for supplying meaningful text.
    pub fn add_entity_message(
        &mut self,
        text: impl Into<String>,
        severity: Severity,
        entity: Option<&str>,
        entity_key: Option<i64>,
        entity_field: Option<&str>,
    ) {
        let message = Message::from_fields(
            text.into(),
            severity,
            entity.map(str::to_string),
            entity_key,
            entity_field.map(str::to_string),
        )
        .with_sequence(self.next_sequence());
        self.messages.push(message);

        MessagesAdded {
            added: 1,
            total: self.messages.len(),
        }
        .log();

        self.alert_listener();
    }

    /// Hydrate and append a batch of raw diagnostic records, notifying the
    /// listener once. Appended messages are renumbered in bus order.
    ///
    /// An empty batch is a no-op. Records without text or a recognized severity
    /// are dropped; the listener is still notified even if every record was
    /// dropped. A record that cannot be hydrated at all fails the whole batch
    /// and leaves the bus untouched. Returns the number of messages appended.
    pub fn add_messages(&mut self, records: &[Value]) -> Result<usize, EntityError> {
        if records.is_empty() {
            return Ok(0);
        }

        let mut accepted = Vec::with_capacity(records.len());
        for record in records {
            let mut builder = MessageBuilder::new();
            hydrate(&mut builder, record)?;

            if builder.is_usable() {
                accepted.push(builder.build()?);
            }
        }

        let dropped = records.len() - accepted.len();
        if dropped > 0 {
            MalformedMessagesDropped {
                dropped,
                received: records.len(),
            }
            .log();
        }

        let added = accepted.len();
        for message in accepted {
            let sequence = self.next_sequence();
            self.messages.push(message.with_sequence(sequence));
        }

        MessagesAdded {
            added,
            total: self.messages.len(),
        }
        .log();

        self.alert_listener();

        Ok(added)
    }

    pub fn clear_messages(&mut self) {
        let removed = self.messages.len();
        self.messages.clear();

        MessagesCleared { removed }.log();

        self.alert_listener();
    }

    /// Messages tied to a specific field of a specific entity instance, in
    /// display order.
    pub fn get_entity_messages(&self) -> Vec<&Message> {
        self.messages
            .iter()
            .filter(|message| message.is_entity_message())
            .collect()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Highest live severity, INFO when the bus is empty.
    pub fn max_severity(&self) -> Severity {
        self.messages
            .iter()
            .map(Message::severity)
            .max()
            .unwrap_or(Severity::Info)
    }

    /// The live messages in the `{list, maxSeverity}` wire shape.
    pub fn envelope(&self) -> EnvelopeSnapshot {
        EnvelopeSnapshot::from_messages(&self.messages)
    }

    /// Sequences count up from 1 in assignment order and survive clearing.
    fn next_sequence(&mut self) -> i64 {
        self.last_sequence += 1;
        self.last_sequence
    }

    fn alert_listener(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener(&self.messages);
        }
    }
}

impl std::fmt::Debug for MessageBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageBus")
            .field("messages", &self.messages)
            .field("has_listener", &self.listener.is_some())
            .field("last_sequence", &self.last_sequence)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex as StdMutex;

    /// Bus whose listener records every snapshot it receives.
    fn recording_bus() -> (MessageBus, Arc<StdMutex<Vec<Vec<Message>>>>) {
        let snapshots = Arc::new(StdMutex::new(Vec::new()));
        let sink = snapshots.clone();

        let mut bus = MessageBus::new();
        bus.set_message_listener(move |messages| sink.lock().unwrap().push(messages.to_vec()));

        (bus, snapshots)
    }

    fn last_snapshot(snapshots: &Arc<StdMutex<Vec<Vec<Message>>>>) -> Vec<Message> {
        snapshots.lock().unwrap().last().cloned().unwrap_or_default()
    }

    fn two_record_batch() -> Vec<Value> {
        vec![
            json!({ "text": "this is a message", "severity": "WARN" }),
            json!({
                "text": "this is an entity message",
                "severity": "ERROR",
                "entity": "Foo",
                "entityKey": 123,
                "entityField": "Bar"
            }),
        ]
    }

    #[test]
    fn test_add_message_without_entity_info() {
        let (mut bus, snapshots) = recording_bus();

        bus.add_message("this is a message", Severity::Warn);

        let messages = last_snapshot(&snapshots);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text(), "this is a message");
        assert_eq!(messages[0].severity(), Severity::Warn);
        assert_eq!(messages[0].entity(), None);
        assert_eq!(messages[0].entity_key(), None);
        assert_eq!(messages[0].entity_field(), None);
    }

    #[test]
    fn test_add_message_with_entity_info() {
        let (mut bus, snapshots) = recording_bus();

        bus.add_entity_message("this is a message", Severity::Warn, Some("Foo"), Some(123), Some("Bar"));

        let messages = last_snapshot(&snapshots);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].entity(), Some("Foo"));
        assert_eq!(messages[0].entity_key(), Some(123));
        assert_eq!(messages[0].entity_field(), Some("Bar"));
    }

    #[test]
    fn test_each_add_delivers_full_snapshot() {
        let (mut bus, snapshots) = recording_bus();

        bus.add_message("first", Severity::Info);
        bus.add_message("second", Severity::Error);

        let snapshots = snapshots.lock().unwrap();
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].len(), 1);
        let texts: Vec<&str> = snapshots[1].iter().map(Message::text).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn test_add_messages_from_dto_array() {
        let (mut bus, snapshots) = recording_bus();

        let added = bus.add_messages(&two_record_batch()).unwrap();
        assert_eq!(added, 2);

        // One notification for the whole batch
        assert_eq!(snapshots.lock().unwrap().len(), 1);

        let messages = last_snapshot(&snapshots);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text(), "this is a message");
        assert_eq!(messages[0].severity(), Severity::Warn);
        assert_eq!(messages[0].entity(), None);
        assert_eq!(messages[1].text(), "this is an entity message");
        assert_eq!(messages[1].severity(), Severity::Error);
        assert_eq!(messages[1].entity(), Some("Foo"));
        assert_eq!(messages[1].entity_key(), Some(123));
        assert_eq!(messages[1].entity_field(), Some("Bar"));
        assert_eq!(messages[0].sequence(), 1);
        assert_eq!(messages[1].sequence(), 2);
    }

    #[test]
    fn test_clear_messages() {
        let (mut bus, snapshots) = recording_bus();

        bus.add_message("this is a message", Severity::Warn);
        assert_eq!(last_snapshot(&snapshots).len(), 1);

        bus.clear_messages();
        assert_eq!(snapshots.lock().unwrap().len(), 2);
        assert!(last_snapshot(&snapshots).is_empty());
        assert!(bus.is_empty());
    }

    #[test]
    fn test_get_entity_messages() {
        let (mut bus, _snapshots) = recording_bus();
        bus.add_messages(&two_record_batch()).unwrap();

        let entity_messages = bus.get_entity_messages();
        assert_eq!(entity_messages.len(), 1);
        assert_eq!(entity_messages[0].text(), "this is an entity message");
        assert_eq!(entity_messages[0].entity_key(), Some(123));
    }

    #[test]
    fn test_entity_key_zero_is_an_entity_message() {
        let mut bus = MessageBus::new();
        bus.add_entity_message("zero key", Severity::Error, Some("Foo"), Some(0), Some("Bar"));
        bus.add_entity_message("no field", Severity::Error, Some("Foo"), Some(1), None);

        let entity_messages = bus.get_entity_messages();
        assert_eq!(entity_messages.len(), 1);
        assert_eq!(entity_messages[0].text(), "zero key");
    }

    #[test]
    fn test_malformed_records_are_dropped_individually() {
        let (mut bus, snapshots) = recording_bus();

        let records = vec![
            json!({ "text": "kept", "severity": "INFO" }),
            json!({ "severity": "ERROR" }),
            json!({ "text": "", "severity": "ERROR" }),
            json!({ "text": "unknown severity", "severity": "FATAL" }),
            json!({ "text": "also kept", "severity": "SYSTEM" }),
        ];

        let added = bus.add_messages(&records).unwrap();
        assert_eq!(added, 2);

        let texts: Vec<String> = last_snapshot(&snapshots)
            .iter()
            .map(|m| m.text().to_string())
            .collect();
        assert_eq!(texts, vec!["kept", "also kept"]);
    }

    #[test]
    fn test_record_without_severity_key_defaults_to_info() {
        let mut bus = MessageBus::new();
        bus.add_messages(&[json!({ "text": "no severity given" })]).unwrap();

        assert_eq!(bus.messages()[0].severity(), Severity::Info);
    }

    #[test]
    fn test_record_with_null_severity_is_dropped() {
        let mut bus = MessageBus::new();
        let added = bus
            .add_messages(&[
                json!({ "text": "null severity", "severity": null }),
                json!({ "text": "kept", "severity": "WARN" }),
            ])
            .unwrap();

        assert_eq!(added, 1);
        assert_eq!(bus.messages()[0].text(), "kept");
    }

    #[test]
    fn test_all_invalid_batch_still_notifies() {
        let (mut bus, snapshots) = recording_bus();

        bus.add_messages(&[json!({ "severity": "WARN" })]).unwrap();

        let snapshots = snapshots.lock().unwrap();
        assert_eq!(snapshots.len(), 1);
        assert!(snapshots[0].is_empty());
    }

    #[test]
    fn test_empty_batch_is_a_no_op() {
        let (mut bus, snapshots) = recording_bus();

        assert_eq!(bus.add_messages(&[]).unwrap(), 0);
        assert!(snapshots.lock().unwrap().is_empty());
    }

    #[test]
    fn test_unhydratable_record_fails_batch_and_leaves_bus_unchanged() {
        let (mut bus, snapshots) = recording_bus();
        bus.add_message("existing", Severity::Info);

        let records = vec![
            json!({ "text": "fine", "severity": "WARN" }),
            json!({ "text": "bad", "severity": 42 }),
        ];
        let err = bus.add_messages(&records).unwrap_err();

        assert!(matches!(err, EntityError::InvalidArgument { field: "severity", .. }));
        assert_eq!(bus.len(), 1);
        assert_eq!(snapshots.lock().unwrap().len(), 1);

        assert_eq!(
            bus.add_messages(&[Value::Null]).unwrap_err(),
            EntityError::NullArgument { argument: "dto" }
        );
    }

    #[test]
    fn test_sequence_follows_assignment_order() {
        let mut bus = MessageBus::new();
        bus.add_message("first", Severity::Info);
        bus.add_messages(&[
            json!({ "text": "second", "severity": "WARN", "sequence": 90 }),
            json!({ "text": "third", "severity": "WARN" }),
        ])
        .unwrap();
        bus.clear_messages();
        bus.add_entity_message("fourth", Severity::Error, Some("Foo"), Some(1), Some("Bar"));

        assert_eq!(bus.messages()[0].sequence(), 4);
    }

    #[test]
    fn test_failed_batch_does_not_consume_sequences() {
        let mut bus = MessageBus::new();
        bus.add_messages(&[
            json!({ "text": "fine", "severity": "WARN" }),
            json!({ "text": "bad", "severity": 42 }),
        ])
        .unwrap_err();
        bus.add_message("first", Severity::Info);

        assert_eq!(bus.messages()[0].sequence(), 1);
    }

    #[test]
    fn test_mistyped_correlation_field_keeps_record() {
        let (mut bus, snapshots) = recording_bus();

        let added = bus
            .add_messages(&[
                json!({ "text": "Saved draft", "severity": "INFO", "entityKey": "12", "sequence": "1" }),
                json!({ "text": ["not text"], "severity": "WARN" }),
            ])
            .unwrap();

        assert_eq!(added, 1);
        let messages = last_snapshot(&snapshots);
        assert_eq!(messages[0].text(), "Saved draft");
        assert_eq!(messages[0].entity_key(), None);
        assert_eq!(messages[0].sequence(), 1);
    }

    #[test]
    fn test_last_listener_wins() {
        let first = Arc::new(StdMutex::new(0usize));
        let second = Arc::new(StdMutex::new(0usize));

        let mut bus = MessageBus::new();
        let sink = first.clone();
        bus.set_message_listener(move |_| *sink.lock().unwrap() += 1);
        let sink = second.clone();
        bus.set_message_listener(move |_| *sink.lock().unwrap() += 1);

        bus.add_message("hello", Severity::Info);

        assert_eq!(*first.lock().unwrap(), 0);
        assert_eq!(*second.lock().unwrap(), 1);
    }

    #[test]
    fn test_mutations_without_listener() {
        let mut bus = MessageBus::new();
        bus.add_message("quiet", Severity::Info);
        bus.clear_messages();
        assert!(bus.is_empty());
    }

    #[test]
    fn test_max_severity_and_envelope() {
        let mut bus = MessageBus::new();
        assert_eq!(bus.max_severity(), Severity::Info);

        bus.add_message("careful", Severity::Warn);
        bus.add_message("broken", Severity::Error);

        assert_eq!(bus.max_severity(), Severity::Error);
        let envelope = bus.envelope();
        assert_eq!(envelope.max_severity, Severity::Error);
        assert_eq!(envelope.list.len(), 2);
    }
}
