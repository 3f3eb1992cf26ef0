use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::{Provider, ProviderError};

/// A scripted provider for tests. Returns pre-defined results in order,
/// repeating the last one once the script runs out.
pub struct MockProvider {
    responses: Vec<Result<String, ProviderError>>,
    index: AtomicUsize,
    delay: Option<Duration>,
    queries: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn new(responses: Vec<Result<String, ProviderError>>) -> Self {
        Self {
            responses,
            index: AtomicUsize::new(0),
            delay: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Always answers with `text`.
    pub fn ok(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string())])
    }

    /// Always fails with `error`.
    pub fn err(error: ProviderError) -> Self {
        Self::new(vec![Err(error)])
    }

    /// Sleep before answering, to exercise the registry timeout.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queries received so far, in call order.
    pub fn queries(&self) -> Vec<String> {
        self.queries
            .lock()
            .map(|q| q.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, query: &str) -> Result<String, ProviderError> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.to_string());
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let i = self.index.fetch_add(1, Ordering::SeqCst);
        let last = self.responses.len().checked_sub(1).ok_or_else(|| {
            ProviderError::Unavailable("MockProvider: no scripted responses".to_string())
        })?;
        self.responses[i.min(last)].clone()
    }
}
