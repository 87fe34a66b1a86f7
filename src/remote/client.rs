// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Remote calls with diagnostics routing.
//!
//! Every call is handed to a spawned task that performs the transport round
//! trip and then runs the body through the [`ResponseProcessor`]. Dropping the
//! caller's future does not abort that task, so the diagnostics of a call whose
//! caller lost interest still reach the message bus.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::Instrument;

use crate::config::consts::AUTHORIZATION_HEADER;
use crate::config::Config;
use crate::diagnostics::SharedMessageBus;
use crate::errors::CallError;
use crate::observability::messages::remote::{RemoteCallFailed, RemoteCallStarted};
use crate::observability::messages::StructuredLog;
use crate::remote::request::{assemble_full_url, Method, RemoteRequest};
use crate::remote::response::ResponseProcessor;
use crate::traits::Transport;

#[derive(Clone)]
pub struct RestClient {
    service_url: String,
    auth_token: Option<String>,
    list_key: String,
    transport: Arc<dyn Transport>,
    processor: ResponseProcessor,
}

impl RestClient {
    pub fn new(config: &Config, transport: Arc<dyn Transport>, bus: SharedMessageBus) -> Self {
        Self {
            service_url: config.service_url.clone(),
            auth_token: config.auth_token.clone(),
            list_key: config.list_key.clone(),
            transport,
            processor: ResponseProcessor::new(bus),
        }
    }

    pub fn bus(&self) -> &SharedMessageBus {
        self.processor.bus()
    }

    /// Assemble a request for a path relative to the service URL, with the
    /// bearer token attached when one is configured.
    pub fn request(&self, method: Method, path: &str, query: &[(&str, &str)]) -> RemoteRequest {
        let url = assemble_full_url(&self.service_url, path, query);
        let request = RemoteRequest::new(method, url);

        match &self.auth_token {
            Some(token) => request.with_header(AUTHORIZATION_HEADER, format!("Bearer {}", token)),
            None => request,
        }
    }

    /// Send a request and return its payload with the messages envelope removed.
    pub async fn call(&self, request: RemoteRequest) -> Result<Value, CallError> {
        let transport = self.transport.clone();
        let processor = self.processor.clone();

        let routed = tokio::spawn(route(transport, processor, request));

        routed.await.map_err(|e| CallError::Aborted(e.to_string()))?
    }

    /// Like [`RestClient::call`], deserializing the payload into `T`.
    pub async fn call_as<T: DeserializeOwned>(&self, request: RemoteRequest) -> Result<T, CallError> {
        let payload = self.call(request).await?;
        serde_json::from_value(payload).map_err(CallError::Payload)
    }

    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, CallError> {
        self.call(self.request(Method::Get, path, query)).await
    }

    /// GET a collection; the items are read from the configured list key of
    /// the payload and may be empty.
    pub async fn list(&self, path: &str, query: &[(&str, &str)]) -> Result<Vec<Value>, CallError> {
        let mut payload = self.get(path, query).await?;
        let items = payload
            .get_mut(self.list_key.as_str())
            .map(Value::take)
            .unwrap_or(Value::Null);

        serde_json::from_value(items).map_err(CallError::Payload)
    }

    pub async fn post(&self, path: &str, body: Value) -> Result<Value, CallError> {
        self.call(self.request(Method::Post, path, &[]).with_body(body)).await
    }

    pub async fn put(&self, path: &str, body: Value) -> Result<Value, CallError> {
        self.call(self.request(Method::Put, path, &[]).with_body(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, CallError> {
        self.call(self.request(Method::Delete, path, &[])).await
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("service_url", &self.service_url)
            .field("authenticated", &self.auth_token.is_some())
            .field("transport", &self.transport.name())
            .finish()
    }
}

async fn route(
    transport: Arc<dyn Transport>,
    processor: ResponseProcessor,
    request: RemoteRequest,
) -> Result<Value, CallError> {
    let url = request.url.clone();
    let started = RemoteCallStarted {
        method: request.method.as_str(),
        url: &url,
    };
    let span = started.span("remote_call");
    started.log();

    let result = async {
        let body = transport.send(request).await?;
        Ok(processor.process(body).await?)
    }
    .instrument(span)
    .await;

    if let Err(error) = &result {
        RemoteCallFailed { url: &url, error }.log();
    }

    result
}
