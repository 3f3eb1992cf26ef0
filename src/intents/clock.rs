use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};

use super::Intent;
use crate::command::Command;
use crate::providers::ProviderRegistry;

/// `"The current time is 03:07 PM"`.
pub fn format_time<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("The current time is {}", now.format("%I:%M %p"))
}

/// `"Today is Sunday, October 18, 2026"`.
pub fn format_date<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("Today is {}", now.format("%A, %B %d, %Y"))
}

pub struct TimeIntent;

#[async_trait]
impl Intent for TimeIntent {
    fn name(&self) -> &str {
        "time"
    }

    fn triggers(&self) -> &[&str] {
        &["time"]
    }

    fn usage(&self) -> &str {
        "what time is it"
    }

    fn description(&self) -> &str {
        "the current local time"
    }

    async fn handle(&self, _command: &Command, _providers: &ProviderRegistry) -> Result<String> {
        Ok(format_time(&Local::now()))
    }
}

pub struct DateIntent;

#[async_trait]
impl Intent for DateIntent {
    fn name(&self) -> &str {
        "date"
    }

    fn triggers(&self) -> &[&str] {
        &["date", "today"]
    }

    fn usage(&self) -> &str {
        "what's today's date"
    }

    fn description(&self) -> &str {
        "today's date"
    }

    async fn handle(&self, _command: &Command, _providers: &ProviderRegistry) -> Result<String> {
        Ok(format_date(&Local::now()))
    }
}
