use anyhow::Result;
use async_trait::async_trait;

use super::Intent;
use crate::command::Command;
use crate::providers::ProviderRegistry;

pub const GOODBYE: &str = "Shutting down. Goodbye!";

/// Says goodbye. Stateless: the server keeps running, the CLI exits anyway.
pub struct ShutdownIntent;

#[async_trait]
impl Intent for ShutdownIntent {
    fn name(&self) -> &str {
        "shutdown"
    }

    fn triggers(&self) -> &[&str] {
        &["shutdown", "exit", "quit", "goodbye"]
    }

    fn usage(&self) -> &str {
        ""
    }

    fn description(&self) -> &str {
        "say goodbye"
    }

    async fn handle(&self, _command: &Command, _providers: &ProviderRegistry) -> Result<String> {
        Ok(GOODBYE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_triggers() {
        let triggers = ShutdownIntent.triggers();
        assert!(triggers.contains(&"quit"));
        assert!(triggers.contains(&"exit"));
        assert!(triggers.contains(&"shutdown"));
    }
}
