//! The outermost boundary of the assistant. Both the HTTP server and the
//! CLI only know [`Dispatcher::respond`].

use anyhow::Result;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use tracing::{debug, error};

use crate::command::Command;
use crate::config::Config;
use crate::intents::IntentRegistry;
use crate::providers::ProviderRegistry;

/// Reply to an empty utterance.
pub const EMPTY_PROMPT: &str = "Please say something! Try 'help' to see what I can do.";

/// Reply when no intent matches.
pub const NOT_UNDERSTOOD: &str =
    "I'm not sure I understand that command. Try 'help' to see what I can do.";

/// Reply when a handler fails unexpectedly.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred. Please try again.";

/// Wires an ordered intent registry to the providers its handlers call.
pub struct Dispatcher {
    intents: IntentRegistry,
    providers: ProviderRegistry,
}

impl Dispatcher {
    pub fn new(intents: IntentRegistry, providers: ProviderRegistry) -> Self {
        Self { intents, providers }
    }

    /// Built-in intents backed by the real public services.
    pub fn live(config: &Config) -> Result<Self> {
        Ok(Self::new(IntentRegistry::new(), ProviderRegistry::live(config)?))
    }

    pub fn intents(&self) -> &IntentRegistry {
        &self.intents
    }

    pub fn providers(&self) -> &ProviderRegistry {
        &self.providers
    }

    /// Answer one utterance. Always returns a non-empty string: handler errors
    /// and panics become [`UNEXPECTED_ERROR`].
    pub async fn respond(&self, raw: &str) -> String {
        match AssertUnwindSafe(self.try_respond(raw)).catch_unwind().await {
            Ok(Ok(reply)) if !reply.trim().is_empty() => reply,
            Ok(Ok(_)) => {
                error!(input = raw, "handler produced an empty reply");
                NOT_UNDERSTOOD.to_string()
            }
            Ok(Err(e)) => {
                error!(input = raw, error = %e, "handler failed");
                UNEXPECTED_ERROR.to_string()
            }
            Err(_) => {
                error!(input = raw, "handler panicked");
                UNEXPECTED_ERROR.to_string()
            }
        }
    }

    /// Classify and run the matching handler, propagating handler errors.
    pub async fn try_respond(&self, raw: &str) -> Result<String> {
        let command = Command::parse(raw);
        if command.is_empty() {
            return Ok(EMPTY_PROMPT.to_string());
        }

        let matched = self.intents.matching(&command);
        if matched.len() > 1 {
            debug!(input = command.text(), intents = ?matched, "overlapping intents, first wins");
        }

        let Some(intent) = self.intents.classify(&command) else {
            debug!(input = command.text(), "no intent matched");
            return Ok(NOT_UNDERSTOOD.to_string());
        };
        debug!(input = command.text(), intent = intent.name(), "dispatching");

        if intent.lists_intents() {
            return Ok(self.intents.help_text());
        }

        intent.handle(&command, &self.providers).await
    }
}
