//! Injected HTTP capability.
//!
//! The orchestrator never talks to the network directly; it goes through
//! [`HttpTransport`], so operations are testable against an in-memory fake.
//! [`ReqwestTransport`] is the production implementation.

use std::time::Duration;

use anyhow::{Context, Result as AnyResult};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

/// Body shapes the backend accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    /// `application/json; charset=utf-8`
    Json(Value),
    /// `application/x-www-form-urlencoded`, pairs in insertion order.
    Form(Vec<(String, String)>),
}

/// Transport-level failure: either the server answered outside 2xx, or no
/// response arrived at all. Both are distinct from a 2xx response carrying a
/// logical-failure payload, which the transport returns as `Ok`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    #[error("backend answered HTTP {code}")]
    Status { code: u16, body: String },
    #[error("network failure: {0}")]
    Network(String),
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<String, TransportError>;
    async fn post(&self, url: &str, body: RequestBody) -> Result<String, TransportError>;
}

/// Production transport: a configured `reqwest::Client` bound to the store's
/// base URL. Relative endpoint paths are joined onto the base.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    base: Url,
    http: Client,
}

impl ReqwestTransport {
    pub fn new(base_url: &str, timeout_secs: Option<u64>) -> AnyResult<Self> {
        let base = Url::parse(base_url).context("invalid store base URL")?;
        let http = Client::builder()
            .user_agent("giftlists/0.1")
            .timeout(Duration::from_secs(timeout_secs.unwrap_or(15)))
            .build()?;
        Ok(Self { base, http })
    }

    fn absolute(&self, url: &str) -> Result<Url, TransportError> {
        self.base
            .join(url)
            .map_err(|e| TransportError::Network(format!("bad request URL {url}: {e}")))
    }

    async fn finish(resp: Result<reqwest::Response, reqwest::Error>) -> Result<String, TransportError> {
        let resp = resp.map_err(|e| TransportError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        if !status.is_success() {
            return Err(TransportError::Status {
                code: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}


#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<String, TransportError> {
        Self::finish(self.http.get(self.absolute(url)?).send().await).await
    }

    async fn post(&self, url: &str, body: RequestBody) -> Result<String, TransportError> {
        let req = self.http.post(self.absolute(url)?);
        let req = match body {
            RequestBody::Empty => req,
            RequestBody::Json(value) => req
                .header("Content-Type", "application/json; charset=utf-8")
                .json(&value),
            RequestBody::Form(pairs) => req.form(&pairs),
        };
        Self::finish(req.send().await).await
    }
}
