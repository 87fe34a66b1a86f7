// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;      // transports
pub mod config;        // client configuration
pub mod diagnostics;   // messages + bus
pub mod errors;        // error handling
pub mod observability;
pub mod remote;        // rest client + response processing
pub mod traits;        // transport abstraction
