//! Group list fetching
//!
//! The group list is published as a single JSON array. It is read once per
//! load, after a fixed delay, with no retries.

use crate::{Error, Result};
use async_trait::async_trait;
use groupboard_config::SourceConfig;
use model::Group;
use reqwest::StatusCode;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Source of the full group list
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Load the full list. The result is never empty.
    async fn fetch(&self) -> Result<Vec<Group>>;

    /// Where the list is loaded from, for messages
    fn location(&self) -> String;
}

/// Fetches the group list over HTTP
pub struct HttpFetcher {
    client: reqwest::Client,
    url: String,
    delay: Duration,
}

impl HttpFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            delay: Duration::ZERO,
        }
    }

    /// Wait this long before issuing the request
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        let url = config.parsed_url()?;
        Ok(Self::new(url.as_str()).with_delay(Duration::from_millis(config.delay_ms)))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self) -> Result<Vec<Group>> {
        if !self.delay.is_zero() {
            debug!("Waiting {:?} before fetching", self.delay);
            tokio::time::sleep(self.delay).await;
        }

        info!("Fetching groups from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::FetchFailed {
                location: self.url.clone(),
                reason: e.to_string(),
            })?;

        if response.status() != StatusCode::OK {
            return Err(Error::FetchFailed {
                location: self.url.clone(),
                reason: format!("HTTP {}", response.status()),
            });
        }

        let bytes = response.bytes().await.map_err(|e| Error::FetchFailed {
            location: self.url.clone(),
            reason: e.to_string(),
        })?;

        let groups = decode_groups(&bytes, &self.url)?;
        info!("Fetched {} groups", groups.len());
        Ok(groups)
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

/// Reads the group list from a local JSON file
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Fetcher for FileFetcher {
    async fn fetch(&self) -> Result<Vec<Group>> {
        info!("Reading groups from {}", self.path.display());
        let bytes = tokio::fs::read(&self.path).await?;
        let groups = decode_groups(&bytes, &self.location())?;
        info!("Read {} groups", groups.len());
        Ok(groups)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Decode a JSON array of groups, rejecting an empty array
pub fn decode_groups(bytes: &[u8], location: &str) -> Result<Vec<Group>> {
    let groups: Vec<Group> = serde_json::from_slice(bytes)?;
    if groups.is_empty() {
        return Err(Error::EmptyResult {
            location: location.to_string(),
        });
    }
    Ok(groups)
}

/// Build the fetcher described by the source configuration
pub fn fetcher_for(config: &SourceConfig) -> Result<Box<dyn Fetcher>> {
    match &config.file {
        Some(path) => Ok(Box::new(FileFetcher::new(path))),
        None => Ok(Box::new(HttpFetcher::from_config(config)?)),
    }
}
