// ABOUTME: Raw feed item normalization into canonical Episode records.
// ABOUTME: Pure and deterministic; malformed items are defaulted, never dropped.

use chrono::Utc;

use crate::duration_parse::parse_duration_seconds;
use crate::models::{Episode, ParsedFeed, RawFeedItem};
use crate::sanitize::clean_description;
use crate::title_parse::{extract_guests, generate_slug};

/// Normalizes a parsed feed into canonical episodes, newest first.
///
/// Every raw item yields exactly one episode. Missing fields are filled
/// with defaults: positional id, "Untitled Episode" title, zero duration,
/// channel image, fetch-time publish date.
pub fn normalize_feed(feed: &ParsedFeed) -> Vec<Episode> {
    let mut episodes: Vec<Episode> = feed
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| normalize_item(item, index, feed.image_url.as_deref()))
        .collect();

    episodes.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    episodes
}

fn normalize_item(item: &RawFeedItem, index: usize, channel_image: Option<&str>) -> Episode {
    let title = item
        .title
        .clone()
        .unwrap_or_else(|| "Untitled Episode".to_string());

    let episode_number = item
        .episode_number_raw
        .as_deref()
        .and_then(|s| s.trim().parse::<u32>().ok());

    let season = item
        .season_raw
        .as_deref()
        .and_then(|s| s.trim().parse::<u32>().ok());

    let duration = item
        .duration_raw
        .as_deref()
        .and_then(parse_duration_seconds)
        .unwrap_or(0);

    Episode {
        id: item
            .guid
            .clone()
            .unwrap_or_else(|| format!("episode-{index}")),
        slug: generate_slug(&title, episode_number),
        guests: extract_guests(&title),
        title,
        description: clean_description(&item.description_html),
        published_at: item.published.unwrap_or_else(Utc::now),
        duration,
        audio_url: item.audio_url.clone().unwrap_or_default(),
        image_url: item
            .image_url
            .clone()
            .or_else(|| channel_image.map(String::from))
            .unwrap_or_default(),
        episode_number,
        season,
    }
}
