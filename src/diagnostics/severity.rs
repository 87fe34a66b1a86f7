// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Ordered diagnostic severities.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Diagnostic level of a message, ordered from least to most severe.
///
/// The set is closed: labels outside it never resolve to a value, and the
/// escalation check treats them as dangerous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// A positive outcome that should be reported.
    Info,
    /// A negative outcome that did not prevent the request from completing.
    Warn,
    /// An expected negative outcome that prevented the request from completing,
    /// typically bad data in the request.
    Error,
    /// An unexpected outcome that interrupted processing, typically a bad system
    /// configuration or a programming error.
    System,
}

impl Severity {
    /// Every severity in ascending order.
    pub const VALUES: [Severity; 4] = [
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::System,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::System => "SYSTEM",
        }
    }

    /// Resolve a label to its severity. Matching is exact and case-sensitive;
    /// absent, empty, and unknown labels yield `None`.
    pub fn retrieve_value_from_label(label: Option<&str>) -> Option<Severity> {
        let label = label.filter(|l| !l.is_empty())?;

        Self::VALUES.into_iter().find(|value| value.label() == label)
    }

    /// True for ERROR and SYSTEM, and for any label that does not resolve.
    pub fn is_error_severity(label: Option<&str>) -> bool {
        match Self::retrieve_value_from_label(label) {
            Some(severity) => severity.is_error(),
            None => true,
        }
    }

    pub fn is_error(self) -> bool {
        self >= Severity::Error
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Overall outcome of a request, derived from its maximum severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionStatus {
    Ok,
    Error,
    Failure,
}

impl CompletionStatus {
    /// INFO and WARN complete normally, ERROR is an expected failure, and
    /// SYSTEM or an unrecognized label is an interrupted request.
    pub fn from_max_severity(label: Option<&str>) -> Self {
        match Severity::retrieve_value_from_label(label) {
            Some(Severity::Info) | Some(Severity::Warn) => CompletionStatus::Ok,
            Some(Severity::Error) => CompletionStatus::Error,
            Some(Severity::System) | None => CompletionStatus::Failure,
        }
    }
}

impl Display for CompletionStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            CompletionStatus::Ok => "OK",
            CompletionStatus::Error => "ERROR",
            CompletionStatus::Failure => "FAILURE",
        };
        f.write_str(text)
    }
}
