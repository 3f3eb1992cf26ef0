use anyhow::Result;
use async_trait::async_trait;

use super::{Intent, pick};
use crate::command::Command;
use crate::providers::ProviderRegistry;

pub const FACTS: &[&str] = &[
    "Honey never spoils. Archaeologists have found edible honey in ancient Egyptian tombs.",
    "Octopuses have three hearts and blue blood.",
    "A day on Venus is longer than a year on Venus.",
    "Bananas are berries, but strawberries are not.",
    "The Eiffel Tower can be about 15 cm taller in summer because the iron expands in the heat.",
    "Wombat droppings are cube-shaped.",
    "There are more possible games of chess than atoms in the observable universe.",
];

pub struct TriviaIntent;

#[async_trait]
impl Intent for TriviaIntent {
    fn name(&self) -> &str {
        "trivia"
    }

    fn triggers(&self) -> &[&str] {
        &["trivia", "fun fact", "random fact"]
    }

    fn usage(&self) -> &str {
        "tell me a fun fact"
    }

    fn description(&self) -> &str {
        "a piece of trivia"
    }

    async fn handle(&self, _command: &Command, _providers: &ProviderRegistry) -> Result<String> {
        Ok(format!("Did you know? {}", pick(FACTS)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn returns_a_known_fact() {
        let reg = ProviderRegistry::new(Duration::from_secs(1));
        let reply = TriviaIntent
            .handle(&Command::parse("trivia"), &reg)
            .await
            .unwrap();
        let fact = reply.strip_prefix("Did you know? ").unwrap();
        assert!(FACTS.contains(&fact));
    }
}
