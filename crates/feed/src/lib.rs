// ABOUTME: Core feed library for callboard.
// ABOUTME: Fetches the podcast RSS feed and normalizes it into episode records.

pub mod client;
pub mod collections;
pub mod duration_parse;
pub mod error;
pub mod html_utils;
pub mod itunes_ext;
pub mod models;
pub mod normalize;
pub mod parser;
pub mod repository;
pub mod sanitize;
pub mod time_parse;
pub mod title_parse;

pub use client::{FeedClient, DEFAULT_FEED_URL};
pub use collections::{
    adjacent, all_collections, collection_by_id, resolve_members, Collection,
};
pub use duration_parse::parse_duration_seconds;
pub use error::FeedError;
pub use html_utils::{add_target_blank_to_links, decode_entities, strip_html};
pub use models::{Episode, Guest, Page, ParsedFeed, PodcastMetadata, RawFeedItem};
pub use normalize::normalize_feed;
pub use parser::parse_feed_bytes;
pub use repository::{EpisodeRepository, SortOrder};
pub use sanitize::clean_description;
pub use time_parse::parse_flexible_time;
pub use title_parse::{extract_guests, generate_slug};
