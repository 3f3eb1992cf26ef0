use anyhow::Result;
use async_trait::async_trait;

use super::Intent;
use crate::command::Command;
use crate::providers::{ProviderError, ProviderKind, ProviderRegistry};
use crate::text::clean_fragment;

/// Words that introduce the place in "weather in london", "forecast for rome".
const PLACE_MARKERS: &[&str] = &[" in ", " for ", " at "];

/// Trailing words that say when, not where.
const TIME_WORDS: &[&str] = &["today", "tonight", "now", "tomorrow"];

pub struct WeatherIntent;

#[async_trait]
impl Intent for WeatherIntent {
    fn name(&self) -> &str {
        "weather"
    }

    fn triggers(&self) -> &[&str] {
        &["weather", "forecast"]
    }

    fn usage(&self) -> &str {
        "weather in [city]"
    }

    fn description(&self) -> &str {
        "current conditions for a city"
    }

    async fn handle(&self, command: &Command, providers: &ProviderRegistry) -> Result<String> {
        let Some(city) = city(command.text()) else {
            return Ok("Please specify a city, for example 'weather in London'.".to_string());
        };

        Ok(match providers.fetch(ProviderKind::Weather, &city).await {
            Ok(report) => report,
            Err(ProviderError::NotFound(_)) => {
                format!("I couldn't find a place called {city}. Try another city name.")
            }
            Err(_) => format!("I couldn't get the weather for {city} right now. Try again later."),
        })
    }
}

/// The place named after the last "in"/"for"/"at", if any.
fn city(text: &str) -> Option<String> {
    let padded = format!(" {text} ");
    let (idx, marker) = PLACE_MARKERS
        .iter()
        .filter_map(|m| padded.rfind(m).map(|i| (i, *m)))
        .max_by_key(|(i, _)| *i)?;

    let rest = clean_fragment(&padded[idx + marker.len()..]);
    let mut words: Vec<&str> = rest.split_whitespace().collect();
    loop {
        let trailing = match words.as_slice() {
            [.., "right", "now"] => 2,
            [.., last] if TIME_WORDS.contains(last) => 1,
            _ => break,
        };
        words.truncate(words.len() - trailing);
    }

    let joined = words.join(" ");
    let city = clean_fragment(&joined);
    if city.is_empty() || city == "weather" || city == "the weather" {
        None
    } else {
        Some(city.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::mock::MockProvider;
    use std::sync::Arc;
    use std::time::Duration;

    fn registry(provider: MockProvider) -> ProviderRegistry {
        let mut reg = ProviderRegistry::new(Duration::from_secs(1));
        reg.register(ProviderKind::Weather, Arc::new(provider));
        reg
    }

    #[test]
    fn extracts_city() {
        assert_eq!(city("weather in london").as_deref(), Some("london"));
        assert_eq!(city("what's the weather in new york?").as_deref(), Some("new york"));
        assert_eq!(city("forecast for rome").as_deref(), Some("rome"));
        assert_eq!(city("weather in paris today").as_deref(), Some("paris"));
    }

    #[test]
    fn strips_time_words_before_punctuation() {
        assert_eq!(city("what's the weather in paris today?").as_deref(), Some("paris"));
        assert_eq!(city("weather in new york right now?").as_deref(), Some("new york"));
        assert_eq!(city("weather in oslo, today!").as_deref(), Some("oslo"));
        assert_eq!(city("forecast for rome tonight").as_deref(), Some("rome"));
    }

    #[test]
    fn time_word_alone_is_not_a_city() {
        assert_eq!(city("weather forecast for today"), None);
        assert_eq!(city("weather in right now"), None);
        assert_eq!(city("weather in now?"), None);
    }

    #[test]
    fn last_marker_wins() {
        assert_eq!(city("how is the weather in the city of salt lake city in utah").as_deref(), Some("utah"));
    }

    #[test]
    fn no_city() {
        assert_eq!(city("weather"), None);
        assert_eq!(city("what's the weather like"), None);
        assert_eq!(city("weather in"), None);
    }

    #[tokio::test]
    async fn reports_weather() {
        let reg = registry(MockProvider::ok("Currently in Oslo, Norway: 3°C and snowing."));
        let reply = WeatherIntent
            .handle(&Command::parse("weather in oslo"), &reg)
            .await
            .unwrap();
        assert_eq!(reply, "Currently in Oslo, Norway: 3°C and snowing.");
    }

    #[tokio::test]
    async fn asks_for_city() {
        let reg = registry(MockProvider::ok("unused"));
        let reply = WeatherIntent
            .handle(&Command::parse("weather"), &reg)
            .await
            .unwrap();
        assert!(reply.contains("Please specify a city"));
    }

    #[tokio::test]
    async fn unknown_city_fallback() {
        let reg = registry(MockProvider::err(ProviderError::NotFound("atlantis".into())));
        let reply = WeatherIntent
            .handle(&Command::parse("weather in atlantis"), &reg)
            .await
            .unwrap();
        assert!(reply.contains("couldn't find a place called atlantis"));
    }

    #[tokio::test]
    async fn provider_failure_fallback() {
        let reg = registry(MockProvider::err(ProviderError::Timeout));
        let reply = WeatherIntent
            .handle(&Command::parse("weather in oslo"), &reg)
            .await
            .unwrap();
        assert_eq!(reply, "I couldn't get the weather for oslo right now. Try again later.");
    }
}
