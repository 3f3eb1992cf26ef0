use anyhow::Result;
use async_trait::async_trait;

use super::Intent;
use crate::command::Command;
use crate::providers::{ProviderKind, ProviderRegistry};
use crate::text::{clean_fragment, urlencoded};

pub fn spotify_url(song: &str) -> String {
    format!("https://open.spotify.com/search/{}", urlencoded(song))
}

pub fn youtube_url(song: &str) -> String {
    format!("https://www.youtube.com/results?search_query={}", urlencoded(song))
}

pub struct MusicIntent;

#[async_trait]
impl Intent for MusicIntent {
    fn name(&self) -> &str {
        "music"
    }

    fn triggers(&self) -> &[&str] {
        &["play"]
    }

    fn usage(&self) -> &str {
        "play [song name]"
    }

    fn description(&self) -> &str {
        "links to play a song"
    }

    async fn handle(&self, command: &Command, providers: &ProviderRegistry) -> Result<String> {
        let rest = command.without_first("play");
        let song = clean_fragment(&rest);
        if song.is_empty() {
            return Ok("Please specify a song to play".to_string());
        }

        let mut reply = format!(
            "Here are links to play '{song}':\n\n🎵 Search on Spotify: {}\n🎬 Search on YouTube: {}",
            spotify_url(song),
            youtube_url(song)
        );

        // a failed track search leaves just the links
        if let Ok(tracks) = providers.fetch(ProviderKind::Tracks, song).await {
            reply.push_str("\n\nTop matches:\n");
            reply.push_str(&tracks);
        }

        Ok(reply)
    }
}
