use anyhow::Result;
use async_trait::async_trait;

use super::Intent;
use crate::calc::{self, CalcError};
use crate::command::Command;
use crate::providers::ProviderRegistry;

/// Reply for anything outside the arithmetic allow-list.
pub const MATH_ONLY: &str =
    "Sorry, I can only do basic math operations: numbers, + - * /, and parentheses.";

/// Lead-ins stripped before the expression, longest first.
const PREFIXES: &[&str] = &[
    "how much is",
    "calculate",
    "compute",
    "what is",
    "what's",
    "solve",
];

const OPERATORS: &[char] = &['+', '-', '*', '/'];

pub struct MathIntent;

#[async_trait]
impl Intent for MathIntent {
    fn name(&self) -> &str {
        "math"
    }

    fn triggers(&self) -> &[&str] {
        &["+", "-", "*", "/"]
    }

    fn usage(&self) -> &str {
        "calculate [expression]"
    }

    fn description(&self) -> &str {
        "basic arithmetic, e.g. (2 + 3) * 4"
    }

    fn matches(&self, command: &Command) -> bool {
        expression(command.text()).is_some()
    }

    async fn handle(&self, command: &Command, _providers: &ProviderRegistry) -> Result<String> {
        let Some(expr) = expression(command.text()) else {
            return Ok(MATH_ONLY.to_string());
        };

        Ok(match calc::evaluate(&expr) {
            Ok(value) => format!("{} = {}", expr, calc::format_number(value)),
            Err(CalcError::Disallowed(c)) => {
                tracing::debug!(expr = %expr, disallowed = %c, "rejected expression");
                MATH_ONLY.to_string()
            }
            Err(CalcError::DivisionByZero) => "I can't divide by zero.".to_string(),
            Err(_) => "I couldn't calculate that. Please check the expression.".to_string(),
        })
    }
}

/// The arithmetic expression in `text`, if it looks like one: after an
/// optional lead-in it starts like a number and contains an operator and a
/// digit. The result is not yet checked against the allow-list.
pub fn expression(text: &str) -> Option<String> {
    let mut rest = text.trim();
    for prefix in PREFIXES {
        if let Some(stripped) = rest.strip_prefix(prefix) {
            rest = stripped.trim_start();
            break;
        }
    }
    let rest = rest.trim_end_matches(['?', '=', ' ']).trim();

    let starts_like_number = rest
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || matches!(c, '(' | '.' | '-' | '+'));
    let has_operator = rest.contains(OPERATORS);
    let has_digit = rest.chars().any(|c| c.is_ascii_digit());

    (starts_like_number && has_operator && has_digit).then(|| rest.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    async fn reply(text: &str) -> String {
        let reg = ProviderRegistry::new(Duration::from_secs(1));
        MathIntent.handle(&Command::parse(text), &reg).await.unwrap()
    }

    #[test]
    fn detects_expressions() {
        assert_eq!(expression("2 + 2").as_deref(), Some("2 + 2"));
        assert_eq!(expression("calculate 5*3").as_deref(), Some("5*3"));
        assert_eq!(expression("what is (1 + 2) * 3?").as_deref(), Some("(1 + 2) * 3"));
        assert_eq!(expression("how much is 10 / 4 =").as_deref(), Some("10 / 4"));
    }

    #[test]
    fn ignores_non_expressions() {
        assert_eq!(expression("play blink-182"), None);
        assert_eq!(expression("who is jay-z"), None);
        assert_eq!(expression("what is 42"), None);
        assert_eq!(expression("hello"), None);
        assert_eq!(expression(""), None);
    }

    #[test]
    fn keeps_disallowed_characters_for_rejection() {
        assert_eq!(expression("2 + 2; rm -rf").as_deref(), Some("2 + 2; rm -rf"));
    }

    #[tokio::test]
    async fn evaluates() {
        assert_eq!(reply("2 + 2").await, "2 + 2 = 4");
        assert_eq!(reply("calculate 7 / 2").await, "7 / 2 = 3.5");
    }

    #[tokio::test]
    async fn rejects_outside_allow_list() {
        assert_eq!(reply("2 + 2; rm -rf").await, MATH_ONLY);
        assert_eq!(reply("2 + __import__('os')").await, MATH_ONLY);
    }

    #[tokio::test]
    async fn division_by_zero_is_explained() {
        assert_eq!(reply("1 / 0").await, "I can't divide by zero.");
    }

    #[tokio::test]
    async fn syntax_error_is_explained() {
        assert!(reply("2 + * 3").await.contains("couldn't calculate"));
    }
}
