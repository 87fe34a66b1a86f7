// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Calls to remote services and the routing of their embedded diagnostics.

mod client;
mod request;
mod response;


pub use client::RestClient;
pub use request::{assemble_full_url, Method, RemoteRequest};
pub use response::{process_response, ResponseProcessor};
