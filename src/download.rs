use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::config::ExpandConfig;
use crate::contract::{MonsterSource, Reference};
use crate::error::ExpandError;

/// Body of the list endpoint. Only `results` is read.
#[derive(Debug, Deserialize)]
struct ReferenceList {
    results: Vec<Reference>,
}

/// HTTP client for the D&D 5e SRD API (or anything serving the same shapes).
pub struct SrdClient {
    client: Client,
    base_url: Url,
    list_path: String,
}

impl SrdClient {
    pub fn new(base_url: &str, list_path: &str) -> Result<Self, ExpandError> {
        Self::with_client(Client::new(), base_url, list_path)
    }

    /// Same as [`SrdClient::new`] but with a caller-built `reqwest::Client`
    /// (custom timeouts, proxies, user agent).
    pub fn with_client(client: Client, base_url: &str, list_path: &str) -> Result<Self, ExpandError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            error!(error = ?e, base_url = %base_url, "[FETCH] Invalid base URL");
            ExpandError::transport(base_url, format!("invalid base URL: {e}"))
        })?;
        info!(base_url = %base_url, list_path = %list_path, "[FETCH] SRD client ready");
        Ok(Self {
            client,
            base_url,
            list_path: list_path.to_string(),
        })
    }

    pub fn from_config(config: &ExpandConfig) -> Result<Self, ExpandError> {
        Self::new(&config.base_url, &config.list_path)
    }

    /// Resolves a path or absolute URL against the base origin.
    pub fn resolve(&self, locator: &str) -> Result<Url, ExpandError> {
        self.base_url.join(locator).map_err(|e| {
            error!(error = ?e, locator = %locator, "[FETCH] Could not resolve locator");
            ExpandError::transport(locator, format!("cannot resolve against {}: {e}", self.base_url))
        })
    }

    /// One GET; returns the body text of a successful response.
    async fn get_text(&self, url: Url) -> Result<String, ExpandError> {
        debug!(url = %url, "[FETCH] GET");
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            error!(error = ?e, url = %url, "[FETCH] Request failed");
            ExpandError::transport(url.as_str(), e)
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, url = %url, "[FETCH] Non-success status");
            return Err(ExpandError::transport(
                url.as_str(),
                format!("server returned {status}"),
            ));
        }

        response.text().await.map_err(|e| {
            error!(error = ?e, url = %url, "[FETCH] Failed to read response body");
            ExpandError::transport(url.as_str(), e)
        })
    }
}

#[async_trait]
impl MonsterSource for SrdClient {
    async fn list_monsters(&self) -> Result<Vec<Reference>, ExpandError> {
        let url = self.resolve(&self.list_path)?;
        info!(url = %url, "[LIST] Fetching monster list");
        let body = self.get_text(url.clone()).await?;

        let list: ReferenceList = serde_json::from_str(&body).map_err(|e| {
            error!(error = ?e, url = %url, "[LIST] Unexpected list response");
            ExpandError::schema(format!("monster list from {url}"), e)
        })?;

        info!(count = list.results.len(), "[LIST] Monster list received");
        Ok(list.results)
    }

    async fn fetch_monster(&self, reference: &Reference) -> Result<Value, ExpandError> {
        let url = self.resolve(&reference.url)?;
        let body = self.get_text(url.clone()).await?;

        serde_json::from_str(&body).map_err(|e| {
            error!(error = ?e, url = %url, monster = %reference.name, "[FETCH] Detail body is not JSON");
            ExpandError::schema(format!("detail for {}", reference.name), e)
        })
    }
}
