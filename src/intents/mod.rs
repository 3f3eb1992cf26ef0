//! What the assistant can be asked to do.
//!
//! Intents implement the [`Intent`] trait and are registered in an
//! [`IntentRegistry`]. Registration order is priority order: the first
//! intent whose predicate accepts a command handles it. Custom intents can
//! be appended with `registry.register(Arc::new(MyIntent))`, after every
//! built-in.

mod clock;
mod help;
mod joke;
mod lookup;
mod math;
mod music;
mod quote;
mod shutdown;
mod smalltalk;
mod trivia;
mod weather;

pub use clock::{format_date, format_time};
pub use math::{MATH_ONLY, expression};
pub use music::{spotify_url, youtube_url};
pub use quote::QUOTES;
pub use shutdown::GOODBYE;
pub use smalltalk::{GREETINGS, IDENTITY, WELLBEING};
pub use trivia::FACTS;

use anyhow::Result;
use async_trait::async_trait;
use rand::seq::IndexedRandom;
use std::sync::Arc;

use crate::command::Command;
use crate::providers::ProviderRegistry;

/// Name of the help intent, whose reply is generated from the registry.
pub const HELP: &str = "help";

/// A recognized category of request: a predicate plus a handler.
#[async_trait]
pub trait Intent: Send + Sync {
    /// Short identifier, e.g. `"weather"`.
    fn name(&self) -> &str;

    /// Substrings that select this intent.
    fn triggers(&self) -> &[&str];

    /// How to invoke it, for the help text, e.g. `"play [song name]"`.
    fn usage(&self) -> &str;

    /// One-line description for the help text.
    fn description(&self) -> &str;

    /// The predicate. Defaults to "contains any trigger".
    fn matches(&self, command: &Command) -> bool {
        command.contains_any(self.triggers())
    }

    /// True if the reply is the registry's help text. The dispatcher answers
    /// such intents with [`IntentRegistry::help_text`] instead of `handle`.
    fn lists_intents(&self) -> bool {
        false
    }

    /// Produce the reply. Provider failures are mapped to fallback text here;
    /// `Err` is reserved for bugs and is caught by the dispatcher.
    async fn handle(&self, command: &Command, providers: &ProviderRegistry) -> Result<String>;
}

/// Ordered intents. Supports runtime registration of extra intents.
pub struct IntentRegistry {
    intents: Vec<Arc<dyn Intent>>,
}

impl IntentRegistry {
    /// Create a registry with all built-in intents in priority order.
    pub fn new() -> Self {
        let intents: Vec<Arc<dyn Intent>> = vec![
            Arc::new(weather::WeatherIntent),
            Arc::new(quote::QuoteIntent),
            Arc::new(trivia::TriviaIntent),
            Arc::new(math::MathIntent),
            Arc::new(music::MusicIntent),
            Arc::new(lookup::LookupIntent),
            Arc::new(joke::JokeIntent),
            Arc::new(clock::TimeIntent),
            Arc::new(clock::DateIntent),
            Arc::new(smalltalk::GreetingIntent),
            Arc::new(smalltalk::WellbeingIntent),
            Arc::new(smalltalk::IdentityIntent),
            Arc::new(help::HelpIntent),
            Arc::new(shutdown::ShutdownIntent),
        ];
        Self { intents }
    }

    /// Append an intent at the lowest priority.
    pub fn register(&mut self, intent: Arc<dyn Intent>) {
        self.intents.push(intent);
    }

    /// The intent that handles `command`: the first one that matches.
    pub fn classify(&self, command: &Command) -> Option<&dyn Intent> {
        self.intents
            .iter()
            .find(|i| i.matches(command))
            .map(|i| i.as_ref())
    }

    /// Every intent that matches `command`, in priority order. More than one
    /// entry means the utterance is ambiguous and only the first will run.
    pub fn matching(&self, command: &Command) -> Vec<&str> {
        self.intents
            .iter()
            .filter(|i| i.matches(command))
            .map(|i| i.name())
            .collect()
    }

    /// Generate help text from all registered intents.
    pub fn help_text(&self) -> String {
        let entries: Vec<(&str, &str)> = self
            .intents
            .iter()
            .filter(|i| !i.usage().is_empty())
            .map(|i| (i.usage(), i.description()))
            .collect();

        let max_width = entries
            .iter()
            .map(|(usage, _)| usage.len())
            .max()
            .unwrap_or(10);

        let mut out = String::from("I can help you with:\n");
        for (usage, desc) in &entries {
            out.push_str(&format!("- {usage:<max_width$}  {desc}\n"));
        }
        out.push_str("And more! Just ask me anything.");
        out
    }

    /// All registered intent names, in priority order.
    pub fn names(&self) -> Vec<&str> {
        self.intents.iter().map(|i| i.name()).collect()
    }
}

impl Default for IntentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A random entry from a canned phrase list.
pub(crate) fn pick(options: &'static [&'static str]) -> &'static str {
    options
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or("I'm here.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Option<String> {
        let reg = IntentRegistry::new();
        reg.classify(&Command::parse(text)).map(|i| i.name().to_string())
    }

    #[test]
    fn builtins_in_priority_order() {
        let reg = IntentRegistry::new();
        assert_eq!(
            reg.names(),
            [
                "weather", "quote", "trivia", "math", "music", "lookup", "joke", "time", "date",
                "greeting", "wellbeing", "identity", "help", "shutdown"
            ]
        );
    }

    #[test]
    fn no_duplicate_names() {
        let reg = IntentRegistry::new();
        let names = reg.names();
        let mut seen = Vec::new();
        for n in &names {
            assert!(!seen.contains(n), "duplicate intent: {n}");
            seen.push(n);
        }
    }

    #[test]
    fn classifies_each_builtin() {
        let cases = [
            ("what's the weather in paris", "weather"),
            ("give me a quote", "quote"),
            ("tell me some trivia", "trivia"),
            ("2 + 2", "math"),
            ("play believe", "music"),
            ("who is ada lovelace", "lookup"),
            ("tell me about rust", "lookup"),
            ("tell me a joke", "joke"),
            ("what time is it", "time"),
            ("what's today's date", "date"),
            ("hello", "greeting"),
            ("how are you", "wellbeing"),
            ("what is your name", "identity"),
            ("who are you", "identity"),
            ("help", "help"),
            ("what can you do", "help"),
            ("shutdown", "shutdown"),
            ("quit", "shutdown"),
        ];
        for (text, expected) in cases {
            assert_eq!(classify(text).as_deref(), Some(expected), "input {text:?}");
        }
    }

    #[test]
    fn gibberish_matches_nothing() {
        assert_eq!(classify("qwzx vbnm"), None);
    }

    #[test]
    fn first_listed_wins_on_overlap() {
        assert_eq!(classify("weather joke").as_deref(), Some("weather"));
        let reg = IntentRegistry::new();
        assert_eq!(
            reg.matching(&Command::parse("weather joke")),
            ["weather", "joke"]
        );
    }

    #[test]
    fn help_text_lists_every_intent_with_usage() {
        let reg = IntentRegistry::new();
        let text = reg.help_text();
        assert!(text.starts_with("I can help you with:"));
        assert!(text.contains("play [song name]"));
        assert!(text.contains("who is [person]"));
        assert!(text.contains("tell me a joke"));
        assert!(text.contains("what time is it"));
    }

    #[test]
    fn registered_intent_runs_after_builtins() {
        struct PingIntent;

        #[async_trait]
        impl Intent for PingIntent {
            fn name(&self) -> &str {
                "ping"
            }
            fn triggers(&self) -> &[&str] {
                &["ping"]
            }
            fn usage(&self) -> &str {
                "ping"
            }
            fn description(&self) -> &str {
                "pong"
            }
            async fn handle(&self, _: &Command, _: &ProviderRegistry) -> Result<String> {
                Ok("pong".to_string())
            }
        }

        let mut reg = IntentRegistry::new();
        reg.register(Arc::new(PingIntent));
        assert_eq!(reg.names().last(), Some(&"ping"));
        assert_eq!(
            reg.classify(&Command::parse("ping")).map(|i| i.name()),
            Some("ping")
        );
        assert!(reg.help_text().contains("pong"));
    }

    #[test]
    fn pick_returns_member() {
        for _ in 0..20 {
            assert!(GREETINGS.contains(&pick(GREETINGS)));
        }
    }
}
