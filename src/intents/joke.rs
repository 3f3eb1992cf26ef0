use anyhow::Result;
use async_trait::async_trait;

use super::Intent;
use crate::command::Command;
use crate::providers::{ProviderKind, ProviderRegistry};

pub struct JokeIntent;

#[async_trait]
impl Intent for JokeIntent {
    fn name(&self) -> &str {
        "joke"
    }

    fn triggers(&self) -> &[&str] {
        &["joke"]
    }

    fn usage(&self) -> &str {
        "tell me a joke"
    }

    fn description(&self) -> &str {
        "a random joke"
    }

    async fn handle(&self, _command: &Command, providers: &ProviderRegistry) -> Result<String> {
        Ok(providers
            .fetch(ProviderKind::Jokes, "")
            .await
            .unwrap_or_else(|_| "I couldn't fetch a joke right now. Try again later.".to_string()))
    }
}
