// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Diagnostic messages: severities, sealable message entities, DTO hydration
//! and the message bus that aggregates and broadcasts them.

mod bus;
mod envelope;
mod hydrate;
mod message;
mod severity;

pub use bus::{MessageBus, MessageListener, SharedMessageBus};
pub use envelope::{EnvelopeSnapshot, MessageEnvelope, MESSAGES_KEY};
pub use hydrate::{hydrate, FieldMapping, FieldSetter, Hydrate, Sealable};
pub use message::{Message, MessageBuilder, SeverityValue};
pub use severity::{CompletionStatus, Severity};
