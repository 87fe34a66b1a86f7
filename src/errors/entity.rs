// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while building, sealing, or hydrating diagnostic entities.

use thiserror::Error;

/// Errors for sealable entities and DTO hydration.
///
/// These are integration defects rather than user-facing conditions; callers
/// are expected to propagate them, never swallow them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EntityError {
    /// A setter was called after the entity was sealed.
    #[error("set {field} called when sealed")]
    ImmutableState { field: &'static str },

    /// A value of the wrong kind was supplied for a field.
    #[error("invalid value for {field}: {found}")]
    InvalidArgument { field: &'static str, found: String },

    /// Hydration was invoked without a source record.
    #[error("the {argument} is null")]
    NullArgument { argument: &'static str },

    /// The entity cannot become a `Message` because its severity never resolved.
    #[error("message severity is missing or unrecognized")]
    MissingSeverity,
}
