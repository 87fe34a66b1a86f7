// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod entity;
mod response;

pub use config::ConfigError;
pub use entity::EntityError;
pub use response::{
    CallError, ResponseError, TransportError, SEVERITY_ESCALATION_DESCRIPTION,
};
