// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Populate entities from loosely-typed DTO records.
//!
//! Each participating entity declares its own field table: the public field
//! name a record uses, paired with the setter that accepts the record's value.
//! [`hydrate`] walks that table, copies every field the record carries, and
//! seals the entity if it is [`Sealable`].

use crate::errors::EntityError;
use serde_json::Value;

/// An entity that can be made read-only exactly once.
pub trait Sealable {
    /// Make the entity immutable. There is no way back.
    fn seal(&mut self);

    fn is_sealed(&self) -> bool;
}

/// Applies one record value to one field of `T`.
pub type FieldSetter<T> = fn(&mut T, &Value) -> Result<(), EntityError>;

/// One entry of an entity's field table.
pub struct FieldMapping<T: 'static> {
    /// Key used by the DTO record.
    pub name: &'static str,
    pub apply: FieldSetter<T>,
}

/// An entity that can be filled from a DTO record.
pub trait Hydrate: Sized + 'static {
    fn field_mappings() -> &'static [FieldMapping<Self>];

    /// The seal capability, for entities that have one.
    fn as_sealable(&mut self) -> Option<&mut dyn Sealable> {
        None
    }
}

/// Copy every field `source` carries into `target`, then seal `target` when it
/// supports sealing.
///
/// Fields missing from `source` keep their current value and keys the entity
/// does not declare are ignored. A `null` source fails with
/// [`EntityError::NullArgument`]; a source that is not a JSON object fails with
/// [`EntityError::InvalidArgument`]. Setter failures stop hydration and leave
/// the target unsealed.
///
/// # Example
/// ```
/// use serde_json::json;
/// use the_bulletin::diagnostics::{hydrate, MessageBuilder, Sealable, Severity};
///
/// let mut builder = MessageBuilder::new();
/// hydrate(&mut builder, &json!({ "text": "Saved", "severity": "INFO", "other": 1 }))?;
///
/// assert_eq!(builder.text(), "Saved");
/// assert_eq!(builder.severity(), Some(Severity::Info));
/// assert!(builder.is_sealed());
/// # Ok::<(), the_bulletin::errors::EntityError>(())
/// ```
pub fn hydrate<T: Hydrate>(target: &mut T, source: &Value) -> Result<(), EntityError> {
    let record = match source {
        Value::Null => return Err(EntityError::NullArgument { argument: "dto" }),
        Value::Object(record) => record,
        other => {
            return Err(EntityError::InvalidArgument {
                field: "dto",
                found: other.to_string(),
            })
        }
    };

    for mapping in T::field_mappings() {
        if let Some(value) = record.get(mapping.name) {
            (mapping.apply)(target, value)?;
        }
    }

    if let Some(sealable) = target.as_sealable() {
        sealable.seal();
    }

    Ok(())
}
