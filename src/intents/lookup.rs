use anyhow::Result;
use async_trait::async_trait;

use super::Intent;
use crate::command::Command;
use crate::consts::MAX_ALTERNATIVES;
use crate::providers::{ProviderError, ProviderKind, ProviderRegistry};
use crate::text::clean_fragment;

const TRIGGERS: &[&str] = &["who is", "tell me about"];

pub struct LookupIntent;

#[async_trait]
impl Intent for LookupIntent {
    fn name(&self) -> &str {
        "lookup"
    }

    fn triggers(&self) -> &[&str] {
        TRIGGERS
    }

    fn usage(&self) -> &str {
        "who is [person] / tell me about [topic]"
    }

    fn description(&self) -> &str {
        "a short encyclopedia summary"
    }

    async fn handle(&self, command: &Command, providers: &ProviderRegistry) -> Result<String> {
        let rest = command.without(TRIGGERS);
        let topic = clean_fragment(&rest);
        if topic.is_empty() {
            return Ok("Please specify who you want to know about".to_string());
        }

        Ok(match providers.fetch(ProviderKind::Encyclopedia, topic).await {
            Ok(summary) => summary,
            Err(ProviderError::Ambiguous(options)) => {
                let options: Vec<&str> = options
                    .iter()
                    .take(MAX_ALTERNATIVES)
                    .map(String::as_str)
                    .collect();
                format!("Multiple results found. Did you mean: {}?", options.join(", "))
            }
            Err(ProviderError::NotFound(_)) => {
                format!("I couldn't find information about {topic}. Try being more specific.")
            }
            Err(_) => format!(
                "I couldn't retrieve information about {topic} right now. Try again later."
            ),
        })
    }
}
