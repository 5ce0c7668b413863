// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Transports that carry requests to the backend
//!
//! - `HttpTransport`: reqwest client against a base URL
//! - `ScriptedTransport`: replays queued responses, for tests and offline demos

use super::error::TransportError;
use super::request::{ApiRequest, ApiResponse, RequestBody, StatusCode};
use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::Url;
use std::collections::VecDeque;
use std::time::Duration;

/// Sends one request and returns whatever status came back
///
/// Non-2xx statuses are responses, not errors. Only failing to talk to the
/// backend is a `TransportError`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// reqwest-backed transport
pub struct HttpTransport {
    base: Url,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let mut base = Url::parse(base_url)?;
        // A trailing slash keeps a path prefix such as `/portal/` when joining
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { base, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Full URL for an endpoint path, relative to the base
    pub fn endpoint_url(&self, path: &str) -> Result<Url, TransportError> {
        Ok(self.base.join(path.trim_start_matches('/'))?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.endpoint_url(&request.path)?;
        let mut builder = self.client.request(request.method, url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(file) => {
                let part = reqwest::multipart::Part::bytes(file.bytes)
                    .file_name(file.file_name)
                    .mime_str(&file.mime)?;
                builder.multipart(reqwest::multipart::Form::new().part(file.field, part))
            }
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        Ok(ApiResponse::new(status, body))
    }
}

/// Transport that replays queued outcomes in order
///
/// Every request is recorded so assertions can inspect headers and bodies.
/// An empty queue answers with a network error.
#[derive(Default)]
pub struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with a JSON body
    pub fn respond(&self, status: StatusCode, body: serde_json::Value) -> &Self {
        self.outcomes
            .lock()
            .push_back(Ok(ApiResponse::json_body(status, &body)));
        self
    }

    /// Queue a response with an empty body
    pub fn respond_empty(&self, status: StatusCode) -> &Self {
        self.outcomes
            .lock()
            .push_back(Ok(ApiResponse::new(status, Vec::new())));
        self
    }

    /// Queue a transport failure
    pub fn fail(&self, error: TransportError) -> &Self {
        self.outcomes.lock().push_back(Err(error));
        self
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().push(request);
        self.outcomes
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted response".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_scripted_replays_in_order() {
        let transport = ScriptedTransport::new();
        transport
            .respond(StatusCode::OK, json!({"ok": true}))
            .respond_empty(StatusCode::NOT_FOUND);

        let first = transport.send(ApiRequest::get("/a")).await.unwrap();
        let second = transport.send(ApiRequest::get("/b")).await.unwrap();
        let third = transport.send(ApiRequest::get("/c")).await;

        assert_eq!(first.status, StatusCode::OK);
        assert_eq!(second.status, StatusCode::NOT_FOUND);
        assert!(matches!(third, Err(TransportError::Network(_))));
        assert_eq!(transport.request_count(), 3);
        assert_eq!(transport.last_request().unwrap().path, "/c");
    }

    #[test]
    fn test_http_transport_rejects_bad_base_url() {
        let result = HttpTransport::new("not a url", Duration::from_secs(5));
        assert!(matches!(result, Err(TransportError::InvalidUrl(_))));
    }

    #[test]
    fn test_http_transport_base_url() {
        let transport = HttpTransport::new("http://localhost:5000", Duration::from_secs(5)).unwrap();
        assert_eq!(transport.base_url().as_str(), "http://localhost:5000/");
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        for base in ["https://college.test/portal/", "https://college.test/portal"] {
            let transport = HttpTransport::new(base, Duration::from_secs(5)).unwrap();
            assert_eq!(transport.base_url().as_str(), "https://college.test/portal/");
            assert_eq!(
                transport.endpoint_url("/api/student/jobs").unwrap().as_str(),
                "https://college.test/portal/api/student/jobs"
            );
        }

        let root = HttpTransport::new("http://localhost:5000", Duration::from_secs(5)).unwrap();
        assert_eq!(
            root.endpoint_url("/api/admin/login").unwrap().as_str(),
            "http://localhost:5000/api/admin/login"
        );
    }
}
