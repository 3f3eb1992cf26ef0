//! A single utterance, normalized for matching.

use crate::consts::WAKE_WORDS;

/// One incoming utterance. Lives for the duration of a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    raw: String,
    text: String,
}

impl Command {
    /// Lower-case, trim, and strip a leading wake word (`"iris play x"` → `"play x"`).
    pub fn parse(raw: &str) -> Self {
        let mut text = raw.trim().to_lowercase();

        for wake in WAKE_WORDS {
            if text == *wake {
                text.clear();
            } else if let Some(rest) = text.strip_prefix(wake)
                && rest.starts_with(char::is_whitespace)
            {
                text = rest.trim().to_string();
            }
        }

        Self {
            raw: raw.to_string(),
            text,
        }
    }

    /// The input exactly as received.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The normalized text predicates run against.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True if any of the given tokens occurs anywhere in the text.
    pub fn contains_any(&self, tokens: &[&str]) -> bool {
        tokens.iter().any(|t| self.text.contains(t))
    }

    /// The text with every occurrence of each phrase removed, whitespace collapsed.
    pub fn without(&self, phrases: &[&str]) -> String {
        let mut rest = self.text.clone();
        for phrase in phrases {
            rest = rest.replace(phrase, " ");
        }
        rest.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// The text with only the first occurrence of `phrase` removed.
    pub fn without_first(&self, phrase: &str) -> String {
        self.text
            .replacen(phrase, " ", 1)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        let cmd = Command::parse("  What TIME is it  ");
        assert_eq!(cmd.text(), "what time is it");
        assert_eq!(cmd.raw(), "  What TIME is it  ");
    }

    #[test]
    fn strips_wake_words() {
        assert_eq!(Command::parse("Iris play believe").text(), "play believe");
        assert_eq!(Command::parse("alexa tell me a joke").text(), "tell me a joke");
    }

    #[test]
    fn strips_both_wake_words_in_order() {
        assert_eq!(Command::parse("iris alexa hello").text(), "hello");
    }

    #[test]
    fn wake_word_must_be_whole_word() {
        assert_eq!(Command::parse("irises are pretty").text(), "irises are pretty");
    }

    #[test]
    fn bare_wake_word_is_empty() {
        assert!(Command::parse("Iris").is_empty());
        assert!(Command::parse("  alexa ").is_empty());
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(Command::parse("").is_empty());
        assert!(Command::parse("   \t\n").is_empty());
    }

    #[test]
    fn contains_any_is_substring_match() {
        let cmd = Command::parse("tell me a joke");
        assert!(cmd.contains_any(&["joke"]));
        assert!(cmd.contains_any(&["nope", "tell"]));
        assert!(!cmd.contains_any(&["weather"]));
    }

    #[test]
    fn without_removes_all_phrases() {
        let cmd = Command::parse("who is tell me about ada lovelace");
        assert_eq!(cmd.without(&["who is", "tell me about"]), "ada lovelace");
    }

    #[test]
    fn without_first_keeps_later_occurrences() {
        let cmd = Command::parse("play play that funky music");
        assert_eq!(cmd.without_first("play"), "play that funky music");
    }
}
