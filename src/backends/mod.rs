// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Transport backends.
//!
//! The transport layer itself lives outside this crate; these backends cover
//! the cases the crate needs on its own.
//!
//! ## File Backend
//! Serves GET requests from JSON files, one file per resource path. Used by the
//! `bulletin` binary to replay captured service responses.
//!
//! ## Stub Backend (Test-Only)
//! - **CannedTransport**: Answers from a URL → body table, optionally after a delay
//! - **FailingTransport**: Simulates transport failures
//!
//! # Example
//! ```rust,no_run
//! use std::sync::Arc;
//! use the_bulletin::backends::FileTransport;
//! use the_bulletin::traits::Transport;
//!
//! let transport: Arc<dyn Transport> =
//!     Arc::new(FileTransport::new("responses", "http://localhost:8080/rs/"));
//! ```

mod file;
#[cfg(test)]
pub mod stub;

pub use file::FileTransport;
