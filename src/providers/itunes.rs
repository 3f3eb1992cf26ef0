//! Song search via the iTunes Search API.

use async_trait::async_trait;
use serde::Deserialize;

use super::{Provider, ProviderError, get_json, url_with_params};
use crate::consts::MAX_TRACKS;

const SEARCH_URL: &str = "https://itunes.apple.com/search";

pub struct Itunes {
    client: reqwest::Client,
}

impl Itunes {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Provider for Itunes {
    fn name(&self) -> &str {
        "itunes"
    }

    async fn fetch(&self, query: &str) -> Result<String, ProviderError> {
        let limit = MAX_TRACKS.to_string();
        let url = url_with_params(
            SEARCH_URL,
            &[
                ("term", query),
                ("media", "music"),
                ("entity", "song"),
                ("limit", limit.as_str()),
            ],
        )?;
        let resp: SearchResponse = get_json(&self.client, url).await?;
        format_tracks(query, resp.results)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Track>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Track {
    track_name: Option<String>,
    artist_name: Option<String>,
}

/// One numbered line per track: `1. Believe by Cher`.
fn format_tracks(query: &str, tracks: Vec<Track>) -> Result<String, ProviderError> {
    let lines: Vec<String> = tracks
        .into_iter()
        .filter_map(|t| match (t.track_name, t.artist_name) {
            (Some(track), Some(artist)) => Some(format!("{track} by {artist}")),
            (Some(track), None) => Some(track),
            _ => None,
        })
        .take(MAX_TRACKS)
        .enumerate()
        .map(|(i, line)| format!("{}. {}", i + 1, line))
        .collect();

    if lines.is_empty() {
        return Err(ProviderError::NotFound(query.to_string()));
    }
    Ok(lines.join("\n"))
}
