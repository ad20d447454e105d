use crate::{Error, Result};
use async_trait::async_trait;
use dietdesk_types::SessionToken;
use serde_json::Value;
use std::time::Duration;

/// Minimal wire seam.
///
/// The engine (and its tests) talk to this trait, never to reqwest
/// directly. Both methods attach `Authorization: Bearer <token>` and a
/// JSON content type.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// GET a JSON document.
    async fn get_json(&self, url: &str, token: &SessionToken) -> Result<Value>;

    /// PUT with an empty body. Success is any 2xx status; the response
    /// body is ignored.
    async fn put(&self, url: &str, token: &SessionToken) -> Result<()>;
}

/// reqwest-backed transport used outside of tests.
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn get_json(&self, url: &str, token: &SessionToken) -> Result<Value> {
        log::debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .bearer_auth(token.as_str())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Transport(format!("GET {} returned {}", url, status)));
        }

        Ok(response.json().await?)
    }

    async fn put(&self, url: &str, token: &SessionToken) -> Result<()> {
        log::debug!("PUT {}", url);
        let response = self
            .http
            .put(url)
            .bearer_auth(token.as_str())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Transport(format!("PUT {} returned {}", url, status)));
        }

        Ok(())
    }
}
