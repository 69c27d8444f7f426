// ABOUTME: Data models for the podcast feed pipeline.
// ABOUTME: Raw parsed-feed structures plus the canonical Episode record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A guest extracted from an episode title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub name: String,
}

/// One raw item from the upstream feed, before normalization.
///
/// Ephemeral: rebuilt on every feed fetch, never persisted. Fields are kept
/// optional so a malformed item can be defaulted instead of dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFeedItem {
    pub title: Option<String>,
    pub guid: Option<String>,
    pub published: Option<DateTime<Utc>>,
    pub audio_url: Option<String>,
    /// Raw itunes:duration text ("1:23:45", "23:45", or seconds).
    pub duration_raw: Option<String>,
    pub episode_number_raw: Option<String>,
    pub season_raw: Option<String>,
    /// Full content:encoded body when present, otherwise the summary HTML.
    pub description_html: String,
    pub image_url: Option<String>,
    pub explicit: bool,
}

/// A parsed feed: channel metadata plus raw items in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFeed {
    pub title: String,
    pub description: String,
    pub author: Option<String>,
    pub image_url: Option<String>,
    pub language: Option<String>,
    pub explicit: bool,
    pub categories: Vec<String>,
    pub items: Vec<RawFeedItem>,
}

/// Channel-level metadata view of a parsed feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastMetadata {
    pub title: String,
    pub description: String,
    pub author: String,
    pub image_url: String,
    pub categories: Vec<String>,
    pub language: String,
    pub explicit: bool,
}

impl PodcastMetadata {
    /// Builds the channel metadata view, substituting defaults for missing
    /// fields the same way the episode normalizer does.
    pub fn from_feed(feed: &ParsedFeed) -> Self {
        Self {
            title: feed.title.clone(),
            description: feed.description.clone(),
            author: feed.author.clone().unwrap_or_default(),
            image_url: feed.image_url.clone().unwrap_or_default(),
            categories: feed.categories.clone(),
            language: feed.language.clone().unwrap_or_else(|| "en".to_string()),
            explicit: feed.explicit,
        }
    }
}

/// The canonical episode record.
///
/// Constructed fresh from the raw feed on every fetch and never mutated
/// afterwards. `slug` is a best-effort heuristic and is not guaranteed
/// unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Upstream guid, or a positional `episode-{index}` fallback.
    pub id: String,
    pub slug: String,
    pub title: String,
    /// Sanitized HTML (boilerplate removed, other markup preserved).
    pub description: String,
    pub published_at: DateTime<Utc>,
    /// Duration in seconds; 0 when the feed value is missing or unparseable.
    pub duration: u32,
    pub audio_url: String,
    pub image_url: String,
    pub guests: Vec<Guest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,
}

/// One page of episodes from a paginated listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub episodes: Vec<Episode>,
    pub has_more: bool,
    pub total: usize,
}
