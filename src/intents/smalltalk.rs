//! Greetings and questions about the assistant itself.

use anyhow::Result;
use async_trait::async_trait;

use super::{Intent, pick};
use crate::command::Command;
use crate::providers::ProviderRegistry;

pub const GREETINGS: &[&str] = &[
    "Hello! How can I help you today?",
    "Hi there! What can I do for you?",
    "Hey! What's on your mind?",
    "Greetings! How may I assist you?",
];

pub const WELLBEING: &[&str] = &[
    "I'm doing great, thanks for asking! How about you?",
    "I'm functioning perfectly! Ready to help you.",
    "All systems operational! What can I do for you?",
];

pub const IDENTITY: &str = "I'm Iris, your personal AI assistant. I'm here to help you with information, music, jokes, and more!";

pub struct GreetingIntent;

#[async_trait]
impl Intent for GreetingIntent {
    fn name(&self) -> &str {
        "greeting"
    }

    fn triggers(&self) -> &[&str] {
        &["hello", "hi", "hey"]
    }

    fn usage(&self) -> &str {
        ""
    }

    fn description(&self) -> &str {
        "say hello"
    }

    async fn handle(&self, _command: &Command, _providers: &ProviderRegistry) -> Result<String> {
        Ok(pick(GREETINGS).to_string())
    }
}

pub struct WellbeingIntent;

#[async_trait]
impl Intent for WellbeingIntent {
    fn name(&self) -> &str {
        "wellbeing"
    }

    fn triggers(&self) -> &[&str] {
        &["how are you"]
    }

    fn usage(&self) -> &str {
        ""
    }

    fn description(&self) -> &str {
        "ask how Iris is doing"
    }

    async fn handle(&self, _command: &Command, _providers: &ProviderRegistry) -> Result<String> {
        Ok(pick(WELLBEING).to_string())
    }
}

pub struct IdentityIntent;

#[async_trait]
impl Intent for IdentityIntent {
    fn name(&self) -> &str {
        "identity"
    }

    fn triggers(&self) -> &[&str] {
        &["your name", "who are you"]
    }

    fn usage(&self) -> &str {
        ""
    }

    fn description(&self) -> &str {
        "ask who Iris is"
    }

    async fn handle(&self, _command: &Command, _providers: &ProviderRegistry) -> Result<String> {
        Ok(IDENTITY.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn providers() -> ProviderRegistry {
        ProviderRegistry::new(Duration::from_secs(1))
    }

    #[tokio::test]
    async fn greeting_from_fixed_set() {
        for _ in 0..10 {
            let reply = GreetingIntent
                .handle(&Command::parse("hello"), &providers())
                .await
                .unwrap();
            assert!(GREETINGS.contains(&reply.as_str()));
        }
    }

    #[tokio::test]
    async fn wellbeing_from_fixed_set() {
        let reply = WellbeingIntent
            .handle(&Command::parse("how are you"), &providers())
            .await
            .unwrap();
        assert!(WELLBEING.contains(&reply.as_str()));
    }

    #[tokio::test]
    async fn identity_names_iris() {
        let reply = IdentityIntent
            .handle(&Command::parse("who are you"), &providers())
            .await
            .unwrap();
        assert!(reply.starts_with("I'm Iris"));
    }

    #[test]
    fn greeting_is_substring_match() {
        assert!(GreetingIntent.matches(&Command::parse("hey there")));
        assert!(GreetingIntent.matches(&Command::parse("oh hi")));
        assert!(!GreetingIntent.matches(&Command::parse("good morning")));
    }
}
