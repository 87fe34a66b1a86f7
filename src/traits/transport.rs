// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::TransportError;
use crate::remote::RemoteRequest;

/// Delivers a request to a service and returns the raw response body.
///
/// Retry, backoff and timeouts belong to implementations; the response
/// processing layer only ever sees a body or a failure.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: RemoteRequest) -> Result<Value, TransportError>;

    fn name(&self) -> &'static str;
}
