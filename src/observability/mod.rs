// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! Every log event emitted by the crate is a small struct with a `Display`
//! implementation, so log text lives in one place instead of being scattered
//! through the code as format strings.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::bus` - message bus mutations and listener notification
//! * `messages::remote` - remote calls and response processing
//!
//! # Usage
//!
//! ```rust
//! use the_bulletin::observability::messages::{bus::MessagesCleared, StructuredLog};
//!
//! MessagesCleared { removed: 3 }.log();
//! ```

pub mod messages;
