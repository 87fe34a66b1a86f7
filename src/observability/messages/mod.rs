// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! * `bus` - message bus lifecycle events
//! * `remote` - remote call and response processing events
//!
//! # Usage Pattern
//!
//! ```rust
//! use the_bulletin::observability::messages::remote::RemoteCallStarted;
//!
//! let msg = RemoteCallStarted {
//!     method: "GET",
//!     url: "http://localhost:8080/rs/users",
//! };
//!
//! tracing::info!("{}", msg);
//! ```

use tracing::Span;

pub mod bus;
pub mod remote;

/// A log event that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the event at its level with its fields attached.
    fn log(&self);

    /// Open a span carrying the event's fields.
    fn span(&self, name: &str) -> Span;
}
