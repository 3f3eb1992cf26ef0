use anyhow::Result;
use async_trait::async_trait;

use super::{HELP, Intent, IntentRegistry};
use crate::command::Command;
use crate::providers::ProviderRegistry;

/// Lists what the assistant can do. The list needs the whole registry, so the
/// dispatcher answers with
/// [`IntentRegistry::help_text`](super::IntentRegistry::help_text) and never
/// calls `handle`.
pub struct HelpIntent;

#[async_trait]
impl Intent for HelpIntent {
    fn name(&self) -> &str {
        HELP
    }

    fn triggers(&self) -> &[&str] {
        &["help", "what can you do"]
    }

    fn usage(&self) -> &str {
        "help"
    }

    fn description(&self) -> &str {
        "show this list"
    }

    fn lists_intents(&self) -> bool {
        true
    }

    async fn handle(&self, _command: &Command, _providers: &ProviderRegistry) -> Result<String> {
        Ok(IntentRegistry::new().help_text())
    }
}
