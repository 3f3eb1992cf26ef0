//! Random jokes from the Official Joke API.

use async_trait::async_trait;
use serde::Deserialize;

use super::{Provider, ProviderError, get_json};

const RANDOM_JOKE_URL: &str = "https://official-joke-api.appspot.com/random_joke";

pub struct JokeApi {
    client: reqwest::Client,
}

impl JokeApi {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Provider for JokeApi {
    fn name(&self) -> &str {
        "official-joke-api"
    }

    /// The query is ignored; every call returns a fresh random joke.
    async fn fetch(&self, _query: &str) -> Result<String, ProviderError> {
        let url = reqwest::Url::parse(RANDOM_JOKE_URL)
            .map_err(|e| ProviderError::Unavailable(e.to_string()))?;
        let joke: Joke = get_json(&self.client, url).await?;
        format_joke(joke)
    }
}

#[derive(Debug, Deserialize)]
struct Joke {
    #[serde(default)]
    setup: String,
    #[serde(default)]
    punchline: String,
}

fn format_joke(joke: Joke) -> Result<String, ProviderError> {
    let setup = joke.setup.trim();
    let punchline = joke.punchline.trim();
    match (setup.is_empty(), punchline.is_empty()) {
        (true, true) => Err(ProviderError::Malformed("joke has no text".into())),
        (false, true) => Ok(setup.to_string()),
        (true, false) => Ok(punchline.to_string()),
        (false, false) => Ok(format!("{setup}\n{punchline}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_setup_and_punchline() {
        let joke: Joke = serde_json::from_str(
            r#"{"type": "programming", "setup": "Why do programmers prefer dark mode?", "punchline": "Because light attracts bugs.", "id": 1}"#,
        )
        .unwrap();
        assert_eq!(
            format_joke(joke).unwrap(),
            "Why do programmers prefer dark mode?\nBecause light attracts bugs."
        );
    }

    #[test]
    fn empty_joke_is_malformed() {
        let joke: Joke = serde_json::from_str("{}").unwrap();
        assert!(matches!(format_joke(joke), Err(ProviderError::Malformed(_))));
    }

    #[test]
    fn one_liner_is_kept() {
        let joke = Joke {
            setup: "  ".into(),
            punchline: "I would tell you a UDP joke, but you might not get it.".into(),
        };
        assert_eq!(
            format_joke(joke).unwrap(),
            "I would tell you a UDP joke, but you might not get it."
        );
    }
}
