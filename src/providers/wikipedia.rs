//! Encyclopedia lookups against Wikipedia.
//!
//! Two calls: `opensearch` resolves the query to the best-matching title,
//! then the REST summary endpoint returns the lead extract.

use async_trait::async_trait;
use serde::Deserialize;

use super::{Provider, ProviderError, get_json, url_with_params};
use crate::consts::MAX_ALTERNATIVES;
use crate::text::{first_sentences, urlencoded};

const SEARCH_URL: &str = "https://en.wikipedia.org/w/api.php";
const SUMMARY_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";

/// Sentences kept from the summary extract.
const SUMMARY_SENTENCES: usize = 2;

pub struct Wikipedia {
    client: reqwest::Client,
}

impl Wikipedia {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn search(&self, query: &str) -> Result<Vec<String>, ProviderError> {
        let limit = (MAX_ALTERNATIVES + 1).to_string();
        let url = url_with_params(
            SEARCH_URL,
            &[
                ("action", "opensearch"),
                ("search", query),
                ("limit", limit.as_str()),
                ("namespace", "0"),
                ("format", "json"),
            ],
        )?;
        let body: serde_json::Value = get_json(&self.client, url).await?;
        parse_search(query, &body)
    }

    async fn summary(&self, title: &str) -> Result<Summary, ProviderError> {
        let url = format!("{SUMMARY_URL}/{}", urlencoded(&title.replace(' ', "_")));
        let url = reqwest::Url::parse(&url)
            .map_err(|e| ProviderError::Unavailable(format!("bad url {url}: {e}")))?;
        get_json(&self.client, url).await
    }
}

#[async_trait]
impl Provider for Wikipedia {
    fn name(&self) -> &str {
        "wikipedia"
    }

    async fn fetch(&self, query: &str) -> Result<String, ProviderError> {
        let titles = self.search(query).await?;
        let best = titles
            .first()
            .ok_or_else(|| ProviderError::NotFound(query.to_string()))?;
        let summary = self.summary(best).await?;
        format_summary(summary, &titles)
    }
}

/// Page summary as returned by the REST API.
#[derive(Debug, Deserialize)]
struct Summary {
    #[serde(rename = "type", default)]
    kind: String,
    title: String,
    #[serde(default)]
    extract: String,
}

/// `opensearch` answers `[query, [titles], [descriptions], [urls]]`.
fn parse_search(query: &str, body: &serde_json::Value) -> Result<Vec<String>, ProviderError> {
    let titles = body
        .get(1)
        .and_then(|v| v.as_array())
        .ok_or_else(|| ProviderError::Malformed("opensearch response has no title list".into()))?;

    let titles: Vec<String> = titles
        .iter()
        .filter_map(|t| t.as_str())
        .map(str::to_string)
        .collect();

    if titles.is_empty() {
        return Err(ProviderError::NotFound(query.to_string()));
    }
    Ok(titles)
}

fn format_summary(summary: Summary, titles: &[String]) -> Result<String, ProviderError> {
    if summary.kind == "disambiguation" {
        let options: Vec<String> = titles
            .iter()
            .filter(|t| **t != summary.title)
            .take(MAX_ALTERNATIVES)
            .cloned()
            .collect();
        if options.is_empty() {
            return Err(ProviderError::Ambiguous(vec![summary.title]));
        }
        return Err(ProviderError::Ambiguous(options));
    }

    let text = first_sentences(&summary.extract, SUMMARY_SENTENCES);
    if text.is_empty() {
        return Err(ProviderError::NotFound(summary.title));
    }
    Ok(text)
}
