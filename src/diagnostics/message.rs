// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Diagnostic messages in two phases.
//!
//! A [`MessageBuilder`] is the mutable draft: every field can be set any number
//! of times until [`Sealable::seal`] is called, after which each setter fails
//! with [`EntityError::ImmutableState`]. [`MessageBuilder::build`] turns a draft
//! into a [`Message`], which has no mutators at all.
//!
//! # Example
//! ```
//! use the_bulletin::diagnostics::{MessageBuilder, Sealable, Severity};
//!
//! let mut builder = MessageBuilder::new();
//! builder.set_text("Name is required")?.set_severity("ERROR")?;
//! builder.seal();
//! assert!(builder.set_text("too late").is_err());
//!
//! let message = builder.build()?;
//! assert_eq!(message.severity(), Severity::Error);
//! # Ok::<(), the_bulletin::errors::EntityError>(())
//! ```

use crate::diagnostics::hydrate::{FieldMapping, Hydrate, Sealable};
use crate::diagnostics::severity::Severity;
use crate::errors::EntityError;
use crate::observability::messages::bus::MalformedFieldIgnored;
use crate::observability::messages::StructuredLog;
use serde::Serialize;
use serde_json::Value;

/// A severity given either directly or by its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityValue<'a> {
    Level(Severity),
    Label(&'a str),
}

impl From<Severity> for SeverityValue<'_> {
    fn from(severity: Severity) -> Self {
        SeverityValue::Level(severity)
    }
}

impl<'a> From<&'a str> for SeverityValue<'a> {
    fn from(label: &'a str) -> Self {
        SeverityValue::Label(label)
    }
}

/// Mutable, sealable draft of a [`Message`].
#[derive(Debug, Clone, PartialEq)]
pub struct MessageBuilder {
    text: String,
    severity: Option<Severity>,
    sequence: i64,
    entity: Option<String>,
    entity_key: Option<i64>,
    entity_field: Option<String>,
    sealed: bool,
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self {
            text: String::new(),
            severity: Some(Severity::Info),
            sequence: 0,
            entity: None,
            entity_key: None,
            entity_field: None,
            sealed: false,
        }
    }
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_unsealed(&self, field: &'static str) -> Result<(), EntityError> {
        if self.sealed {
            return Err(EntityError::ImmutableState { field });
        }
        Ok(())
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> Result<&mut Self, EntityError> {
        self.ensure_unsealed("text")?;
        self.text = text.into();
        Ok(self)
    }

    /// Set the severity. A label that does not resolve clears the severity,
    /// which keeps the draft out of any message bus.
    pub fn set_severity<'a>(
        &mut self,
        severity: impl Into<SeverityValue<'a>>,
    ) -> Result<&mut Self, EntityError> {
        self.ensure_unsealed("severity")?;
        self.severity = match severity.into() {
            SeverityValue::Level(level) => Some(level),
            SeverityValue::Label(label) => Severity::retrieve_value_from_label(Some(label)),
        };
        Ok(self)
    }

    pub fn set_sequence(&mut self, sequence: i64) -> Result<&mut Self, EntityError> {
        self.ensure_unsealed("sequence")?;
        self.sequence = sequence;
        Ok(self)
    }

    pub fn set_entity(&mut self, entity: Option<String>) -> Result<&mut Self, EntityError> {
        self.ensure_unsealed("entity")?;
        self.entity = entity;
        Ok(self)
    }

    pub fn set_entity_key(&mut self, entity_key: Option<i64>) -> Result<&mut Self, EntityError> {
        self.ensure_unsealed("entity key")?;
        self.entity_key = entity_key;
        Ok(self)
    }

    pub fn set_entity_field(
        &mut self,
        entity_field: Option<String>,
    ) -> Result<&mut Self, EntityError> {
        self.ensure_unsealed("entity field")?;
        self.entity_field = entity_field;
        Ok(self)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    pub fn sequence(&self) -> i64 {
        self.sequence
    }

    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    pub fn entity_key(&self) -> Option<i64> {
        self.entity_key
    }

    pub fn entity_field(&self) -> Option<&str> {
        self.entity_field.as_deref()
    }

    /// Label of the current severity, empty when the severity did not resolve.
    pub fn severity_as_string(&self) -> &'static str {
        self.severity.map(Severity::label).unwrap_or("")
    }

    /// A draft is usable by a bus only with non-empty text and a resolved severity.
    pub fn is_usable(&self) -> bool {
        !self.text.is_empty() && self.severity.is_some()
    }

    pub fn build(self) -> Result<Message, EntityError> {
        let severity = self.severity.ok_or(EntityError::MissingSeverity)?;

        Ok(Message {
            text: self.text,
            severity,
            sequence: self.sequence,
            entity: self.entity,
            entity_key: self.entity_key,
            entity_field: self.entity_field,
        })
    }
}

impl Sealable for MessageBuilder {
    fn seal(&mut self) {
        self.sealed = true;
    }

    fn is_sealed(&self) -> bool {
        self.sealed
    }
}

fn invalid(field: &'static str, value: &Value) -> EntityError {
    EntityError::InvalidArgument {
        field,
        found: value.to_string(),
    }
}

// Only the severity decides whether a record is usable, so it is the one field
// whose kind is enforced. Any other field of the wrong kind keeps its current
// value; for `text` that leaves a fresh record unusable.
fn ignore_malformed(field: &'static str, value: &Value) {
    MalformedFieldIgnored {
        field,
        found: value.to_string(),
    }
    .log();
}

fn optional_string(value: &Value) -> Option<Option<String>> {
    match value {
        Value::String(s) => Some(Some(s.clone())),
        Value::Null => Some(None),
        _ => None,
    }
}

fn hydrate_text(target: &mut MessageBuilder, value: &Value) -> Result<(), EntityError> {
    target.ensure_unsealed("text")?;
    match value {
        Value::String(s) => {
            target.set_text(s.as_str())?;
        }
        Value::Null => {
            target.set_text(String::new())?;
        }
        other => ignore_malformed("text", other),
    }
    Ok(())
}

fn hydrate_severity(target: &mut MessageBuilder, value: &Value) -> Result<(), EntityError> {
    // Checked before the kind so a sealed draft reports its state first.
    target.ensure_unsealed("severity")?;
    match value {
        Value::String(label) => {
            target.set_severity(label.as_str())?;
            Ok(())
        }
        Value::Null => {
            target.severity = None;
            Ok(())
        }
        other => Err(invalid("severity", other)),
    }
}

fn hydrate_sequence(target: &mut MessageBuilder, value: &Value) -> Result<(), EntityError> {
    target.ensure_unsealed("sequence")?;
    match value.as_i64() {
        Some(sequence) => {
            target.set_sequence(sequence)?;
        }
        None => ignore_malformed("sequence", value),
    }
    Ok(())
}

fn hydrate_entity(target: &mut MessageBuilder, value: &Value) -> Result<(), EntityError> {
    target.ensure_unsealed("entity")?;
    match optional_string(value) {
        Some(entity) => {
            target.set_entity(entity)?;
        }
        None => ignore_malformed("entity", value),
    }
    Ok(())
}

fn hydrate_entity_key(target: &mut MessageBuilder, value: &Value) -> Result<(), EntityError> {
    target.ensure_unsealed("entity key")?;
    let entity_key = match value {
        Value::Null => Some(None),
        other => other.as_i64().map(Some),
    };
    match entity_key {
        Some(entity_key) => {
            target.set_entity_key(entity_key)?;
        }
        None => ignore_malformed("entityKey", value),
    }
    Ok(())
}

fn hydrate_entity_field(target: &mut MessageBuilder, value: &Value) -> Result<(), EntityError> {
    target.ensure_unsealed("entity field")?;
    match optional_string(value) {
        Some(entity_field) => {
            target.set_entity_field(entity_field)?;
        }
        None => ignore_malformed("entityField", value),
    }
    Ok(())
}

const MESSAGE_FIELDS: &[FieldMapping<MessageBuilder>] = &[
    FieldMapping { name: "text", apply: hydrate_text },
    FieldMapping { name: "severity", apply: hydrate_severity },
    FieldMapping { name: "sequence", apply: hydrate_sequence },
    FieldMapping { name: "entity", apply: hydrate_entity },
    FieldMapping { name: "entityKey", apply: hydrate_entity_key },
    FieldMapping { name: "entityField", apply: hydrate_entity_field },
];

impl Hydrate for MessageBuilder {
    fn field_mappings() -> &'static [FieldMapping<Self>] {
        MESSAGE_FIELDS
    }

    fn as_sealable(&mut self) -> Option<&mut dyn Sealable> {
        Some(self)
    }
}

/// An immutable diagnostic entry.
///
/// When `entity`, `entity_key` and `entity_field` are all present the message
/// refers to one field of one domain-entity instance, which lets a UI place it
/// next to the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    text: String,
    severity: Severity,
    sequence: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    entity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    entity_key: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    entity_field: Option<String>,
}

impl Message {
    pub(crate) fn from_fields(
        text: String,
        severity: Severity,
        entity: Option<String>,
        entity_key: Option<i64>,
        entity_field: Option<String>,
    ) -> Self {
        Self {
            text,
            severity,
            sequence: 0,
            entity,
            entity_key,
            entity_field,
        }
    }

    /// Number the message for the bus that appends it.
    pub(crate) fn with_sequence(mut self, sequence: i64) -> Self {
        self.sequence = sequence;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn sequence(&self) -> i64 {
        self.sequence
    }

    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    pub fn entity_key(&self) -> Option<i64> {
        self.entity_key
    }

    pub fn entity_field(&self) -> Option<&str> {
        self.entity_field.as_deref()
    }

    pub fn severity_as_string(&self) -> &'static str {
        self.severity.label()
    }

    /// True when the message is tied to a specific field of an entity instance.
    /// A key of 0 is a valid key.
    pub fn is_entity_message(&self) -> bool {
        let present = |s: &Option<String>| s.as_deref().is_some_and(|s| !s.is_empty());
        present(&self.entity) && self.entity_key.is_some() && present(&self.entity_field)
    }
}
