//! REST transport.

use crate::transport::{Params, Transport};
use reqwest::blocking::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Duration;
use tabsearch_core::{Error, Result};

/// Talks to a search cluster through its native REST API.
#[derive(Clone, Debug)]
pub struct RestClient {
    /// Base URL of the node, e.g. `http://localhost:9200`.
    url: String,
    /// Endpoint under the base URL, e.g. `people/_search`.
    endpoint: String,
    /// Extra headers sent with every request.
    headers: Vec<(String, String)>,
    /// HTTP basic authentication `(user, password)`.
    auth: Option<(String, String)>,
    /// Per-request timeout.
    timeout: Option<Duration>,
    http: Client,
}

impl RestClient {
    /// Creates a client for one endpoint of a node.
    pub fn new(url: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            endpoint: endpoint.into(),
            headers: Vec::new(),
            auth: None,
            timeout: None,
            http: Client::new(),
        }
    }

    /// Adds a header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sends an `Authorization: Basic` header with every request.
    pub fn basic_auth(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = Some((user.into(), password.into()));
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[inline]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[inline]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Returns the full request URL, joining base URL and endpoint with one `/`.
    pub fn request_url(&self) -> String {
        if self.url.ends_with('/') {
            format!("{}{}", self.url, self.endpoint)
        } else {
            format!("{}/{}", self.url, self.endpoint)
        }
    }

    fn prepare(&self, request: RequestBuilder, params: Option<Params<'_>>) -> RequestBuilder {
        let mut request = request;
        if let Some(params) = params {
            request = request.query(params);
        }
        for (name, value) in &self.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some((user, password)) = &self.auth {
            request = request.basic_auth(user, Some(password));
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        request
    }

    fn send(&self, request: RequestBuilder) -> Result<Value> {
        let response = request
            .send()
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("{} answered {}", self.request_url(), status);
            let body = response.text().unwrap_or_default();
            return Err(Error::server(server_reason(&body)));
        }

        response
            .json::<Value>()
            .map_err(|e| Error::transport(format!("invalid response body: {}", e)))
    }
}

impl Transport for RestClient {
    fn get(&self, params: Option<Params<'_>>) -> Result<Value> {
        let url = self.request_url();
        log::debug!("GET {}", url);
        self.send(self.prepare(self.http.get(url), params))
    }

    fn post(&self, body: &Value, params: Option<Params<'_>>) -> Result<Value> {
        let url = self.request_url();
        log::debug!("POST {}", url);
        self.send(self.prepare(self.http.post(url), params).json(body))
    }
}

/// Extracts the `error` member of an error body, if the body is JSON.
fn server_reason(body: &str) -> Option<Value> {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|body| body.get("error").cloned())
}
