//! External data sources behind a single "fetch text for query" seam.
//!
//! Every provider implements [`Provider`] and is registered in a
//! [`ProviderRegistry`] under a [`ProviderKind`]. The registry enforces the
//! per-call timeout; providers only classify failures into [`ProviderError`].
//! Turning an error into something a person reads is the intent's job.

pub mod itunes;
pub mod joke_api;
pub mod mock;
pub mod open_meteo;
pub mod wikipedia;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::Config;

/// Why a provider could not produce a display string.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    #[error("request timed out")]
    Timeout,
    #[error("no results for {0:?}")]
    NotFound(String),
    #[error("ambiguous query, candidates: {}", .0.join(", "))]
    Ambiguous(Vec<String>),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProviderError::Timeout
        } else if e.is_decode() {
            ProviderError::Malformed(e.to_string())
        } else {
            ProviderError::Network(e.to_string())
        }
    }
}

/// The four outbound capabilities the assistant knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Encyclopedia,
    Weather,
    Jokes,
    Tracks,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::Encyclopedia,
        ProviderKind::Weather,
        ProviderKind::Jokes,
        ProviderKind::Tracks,
    ];
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProviderKind::Encyclopedia => "encyclopedia",
            ProviderKind::Weather => "weather",
            ProviderKind::Jokes => "jokes",
            ProviderKind::Tracks => "tracks",
        };
        f.write_str(name)
    }
}

/// Something that can turn a query into a short display string.
#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> &str;
    async fn fetch(&self, query: &str) -> Result<String, ProviderError>;
}

/// Holds the provider for each kind. Built once at startup, read-only after.
pub struct ProviderRegistry {
    providers: HashMap<ProviderKind, Arc<dyn Provider>>,
    timeout: Duration,
}

impl ProviderRegistry {
    /// An empty registry. Every fetch fails with `Unavailable` until providers are registered.
    pub fn new(timeout: Duration) -> Self {
        Self {
            providers: HashMap::new(),
            timeout,
        }
    }

    /// A registry wired to the real public services.
    pub fn live(config: &Config) -> Result<Self> {
        let client = build_client(config)?;
        let mut registry = Self::new(config.provider_timeout);
        registry.register(
            ProviderKind::Encyclopedia,
            Arc::new(wikipedia::Wikipedia::new(client.clone())),
        );
        registry.register(
            ProviderKind::Weather,
            Arc::new(open_meteo::OpenMeteo::new(client.clone())),
        );
        registry.register(
            ProviderKind::Jokes,
            Arc::new(joke_api::JokeApi::new(client.clone())),
        );
        registry.register(ProviderKind::Tracks, Arc::new(itunes::Itunes::new(client)));
        Ok(registry)
    }

    pub fn register(&mut self, kind: ProviderKind, provider: Arc<dyn Provider>) {
        self.providers.insert(kind, provider);
    }

    pub fn unregister(&mut self, kind: ProviderKind) {
        self.providers.remove(&kind);
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Name of the provider registered for `kind`, if any.
    pub fn provider_name(&self, kind: ProviderKind) -> Option<&str> {
        self.providers.get(&kind).map(|p| p.name())
    }

    /// Run one lookup under the registry timeout.
    pub async fn fetch(&self, kind: ProviderKind, query: &str) -> Result<String, ProviderError> {
        let Some(provider) = self.providers.get(&kind) else {
            return Err(ProviderError::Unavailable(format!("no {kind} provider")));
        };

        let result = match tokio::time::timeout(self.timeout, provider.fetch(query)).await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Timeout),
        };

        match &result {
            Ok(_) => debug!(provider = provider.name(), %kind, query, "lookup succeeded"),
            Err(e) => warn!(provider = provider.name(), %kind, query, error = %e, "lookup failed"),
        }
        result
    }
}

/// Shared HTTP client: one connection pool, provider-wide timeout and user agent.
pub fn build_client(config: &Config) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(config.provider_timeout)
        .user_agent(config.user_agent.clone())
        .build()
        .context("failed to build HTTP client")
}

/// GET a URL and decode its JSON body, classifying every failure.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: reqwest::Url,
) -> Result<T, ProviderError> {
    let resp = client.get(url).send().await?;

    let status = resp.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ProviderError::NotFound(resp.url().path().to_string()));
    }
    if !status.is_success() {
        return Err(ProviderError::Network(format!("HTTP {status}")));
    }

    // decode failures map to Malformed through From<reqwest::Error>
    resp.json::<T>().await.map_err(ProviderError::from)
}

/// Build a URL with query parameters, encoding the values.
pub(crate) fn url_with_params(base: &str, params: &[(&str, &str)]) -> Result<reqwest::Url, ProviderError> {
    reqwest::Url::parse_with_params(base, params)
        .map_err(|e| ProviderError::Unavailable(format!("bad url {base}: {e}")))
}
