// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::errors::TransportError;
use crate::remote::RemoteRequest;
use crate::traits::Transport;

/// A transport returning canned bodies keyed by full URL, for testing and
/// placeholder purposes
pub struct CannedTransport {
    responses: HashMap<String, Value>,
    delay: Option<Duration>,
    sent: Mutex<Vec<RemoteRequest>>,
}

impl CannedTransport {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            delay: None,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(mut self, url: impl Into<String>, body: Value) -> Self {
        self.responses.insert(url.into(), body);
        self
    }

    /// Wait this long before answering, to simulate a slow network.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Requests received so far, in order
    pub async fn sent(&self) -> Vec<RemoteRequest> {
        self.sent.lock().await.clone()
    }
}

impl Default for CannedTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for CannedTransport {
    async fn send(&self, request: RemoteRequest) -> Result<Value, TransportError> {
        self.sent.lock().await.push(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.responses
            .get(&request.url)
            .cloned()
            .ok_or(TransportError::NotFound { url: request.url })
    }

    fn name(&self) -> &'static str {
        "canned"
    }
}

/// A transport that always fails for testing failure scenarios
pub struct FailingTransport;

#[async_trait]
impl Transport for FailingTransport {
    async fn send(&self, request: RemoteRequest) -> Result<Value, TransportError> {
        Err(TransportError::Rejected {
            url: request.url,
            reason: "Simulated transport failure".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}
