//! HTTP request client for the course/quiz API.
//!
//! Every call resolves `path` against the configured base URL, appends query
//! pairs, attaches the bearer credential when one is set and returns the raw
//! response text. Interpreting that text is left to the caller.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use url::Url;

use crate::config::Config;
use crate::credential::Credential;
use crate::error::{Error, Result};

pub const HEALTH_PATH: &str = "/health";

/// Client for one API origin.
///
/// Clones share the connection pool and the warm-up flag but each carries
/// its own copy of the credential.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    credential: Option<Credential>,
    warm_up_pending: Arc<AtomicBool>,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            credential: None,
            warm_up_pending: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut client = Self::new(config.base_url.clone());
        if !config.warm_up {
            client.warm_up_pending.store(false, Ordering::SeqCst);
        }
        if let Some(token) = &config.token {
            client.credential = Credential::new(token.as_str());
        }
        client
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn set_credential(&mut self, credential: Credential) {
        self.credential = Some(credential);
    }

    pub fn clear_credential(&mut self) {
        self.credential = None;
    }

    /// Build the absolute URL for `path` with `query` appended in order.
    pub fn url(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };
        let mut url = Url::parse(&format!("{}{}", base, path))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Issue one request and return the response body as text.
    pub async fn call<B>(
        &self,
        path: &str,
        method: Method,
        body: Option<&B>,
        query: &[(&str, String)],
    ) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        let body = body.map(serde_json::to_string).transpose()?;
        self.send(path, method, body, query).await
    }

    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        self.send(path, Method::GET, None, query).await
    }

    pub async fn post<B>(&self, path: &str, body: &B) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        self.call(path, Method::POST, Some(body), &[]).await
    }

    async fn send(
        &self,
        path: &str,
        method: Method,
        body: Option<String>,
        query: &[(&str, String)],
    ) -> Result<String> {
        self.warm_up().await;

        let url = self.url(path, query)?;
        tracing::debug!(%method, %url, "api call");

        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(credential) = &self.credential {
            request = request.header(AUTHORIZATION, credential.header_value());
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        check_status(status, text)
    }

    /// Wake a sleeping server once per client lifetime. Failures are ignored.
    async fn warm_up(&self) {
        if !self.warm_up_pending.swap(false, Ordering::SeqCst) {
            return;
        }
        let url = match self.url(HEALTH_PATH, &[]) {
            Ok(url) => url,
            Err(_) => return,
        };
        if let Err(e) = self.http.get(url).send().await {
            tracing::debug!(error = %e, "warm-up request failed");
        }
    }
}

/// Map a non-2xx status to `Error::Request`, preferring the body as message.
pub fn check_status(status: StatusCode, body: String) -> Result<String> {
    if status.is_success() {
        return Ok(body);
    }
    let message = if body.is_empty() {
        status.canonical_reason().unwrap_or("Unknown Status").to_string()
    } else {
        body
    };
    Err(Error::Request {
        status: status.as_u16(),
        message,
    })
}
