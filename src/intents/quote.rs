use anyhow::Result;
use async_trait::async_trait;

use super::{Intent, pick};
use crate::command::Command;
use crate::providers::ProviderRegistry;

pub const QUOTES: &[&str] = &[
    "\"The only way to do great work is to love what you do.\" - Steve Jobs",
    "\"It always seems impossible until it's done.\" - Nelson Mandela",
    "\"Simplicity is prerequisite for reliability.\" - Edsger W. Dijkstra",
    "\"The best time to plant a tree was 20 years ago. The second best time is now.\" - Chinese proverb",
    "\"Whether you think you can or you think you can't, you're right.\" - Henry Ford",
    "\"Act as if what you do makes a difference. It does.\" - William James",
    "\"Done is better than perfect.\" - Sheryl Sandberg",
];

pub struct QuoteIntent;

#[async_trait]
impl Intent for QuoteIntent {
    fn name(&self) -> &str {
        "quote"
    }

    fn triggers(&self) -> &[&str] {
        &["quote", "inspir", "motivat"]
    }

    fn usage(&self) -> &str {
        "inspire me"
    }

    fn description(&self) -> &str {
        "an inspirational quote"
    }

    async fn handle(&self, _command: &Command, _providers: &ProviderRegistry) -> Result<String> {
        Ok(pick(QUOTES).to_string())
    }
}
