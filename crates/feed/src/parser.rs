// ABOUTME: Feed parsing implementation using feed-rs.
// ABOUTME: Maps feed-rs types to raw item models with iTunes metadata merged in.

use crate::error::FeedError;
use crate::itunes_ext::{is_explicit, parse_itunes_extensions, ItemExt, ParsedExtensions};
use crate::models::{ParsedFeed, RawFeedItem};
use crate::time_parse::parse_flexible_time;
use chrono::{DateTime, Utc};
use feed_rs::model::{Entry, Feed as FeedRsFeed, Link};

/// Parses feed bytes into a ParsedFeed.
///
/// # Arguments
/// * `data` - Raw feed bytes (RSS or Atom)
///
/// # Returns
/// * `Ok(ParsedFeed)` - Channel metadata plus raw items in document order
/// * `Err(FeedError)` - Parse failed or the document is not a feed
pub fn parse_feed_bytes(data: &[u8]) -> Result<ParsedFeed, FeedError> {
    let parsed = feed_rs::parser::parse(data).map_err(FeedError::parse)?;

    if parsed.title.is_none() && parsed.entries.is_empty() {
        return Err(FeedError::invalid("no channel metadata or items"));
    }

    // Raw iTunes pass: feed-rs doesn't expose episode/season numbers,
    // per-item image hrefs, or the item's literal guid and pubDate text.
    let ext = parse_itunes_extensions(data);

    let author = extract_feed_author(&parsed, &ext);
    let image_url = extract_feed_image(&parsed, &ext);
    let categories: Vec<String> = parsed.categories.iter().map(|c| c.term.clone()).collect();

    let items: Vec<RawFeedItem> = parsed
        .entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let item_ext = ext.item(&entry.id, idx).cloned().unwrap_or_default();
            map_entry(entry, &item_ext)
        })
        .collect();

    Ok(ParsedFeed {
        title: parsed.title.map(|t| t.content).unwrap_or_default(),
        description: parsed.description.map(|d| d.content).unwrap_or_default(),
        author,
        image_url,
        language: parsed.language,
        explicit: is_explicit(ext.channel.explicit.as_deref()),
        categories,
        items,
    })
}

/// Extracts the feed-level author.
/// Standard author first, iTunes author as fallback.
fn extract_feed_author(feed: &FeedRsFeed, ext: &ParsedExtensions) -> Option<String> {
    if let Some(person) = feed.authors.first() {
        return Some(person.name.clone());
    }
    ext.channel.author.clone()
}

/// Extracts the feed-level image URL.
/// iTunes image has priority, then feed.logo, then feed.icon.
fn extract_feed_image(feed: &FeedRsFeed, ext: &ParsedExtensions) -> Option<String> {
    if let Some(ref href) = ext.channel.image_href {
        return Some(href.clone());
    }
    if let Some(ref logo) = feed.logo {
        return Some(logo.uri.clone());
    }
    feed.icon.as_ref().map(|icon| icon.uri.clone())
}

/// Maps a feed-rs Entry plus its iTunes extensions to a RawFeedItem.
fn map_entry(entry: &Entry, item_ext: &ItemExt) -> RawFeedItem {
    let summary_html = entry
        .summary
        .as_ref()
        .map(|t| t.content.clone())
        .unwrap_or_default();

    // Prefer the full content:encoded body over the summary
    let description_html = entry
        .content
        .as_ref()
        .and_then(|c| c.body.clone())
        .unwrap_or(summary_html);

    RawFeedItem {
        title: entry.title.as_ref().map(|t| t.content.clone()),
        guid: item_ext.guid.clone(),
        published: extract_published(entry, item_ext),
        audio_url: select_audio_url(entry),
        duration_raw: item_ext.duration.clone(),
        episode_number_raw: item_ext.episode.clone(),
        season_raw: item_ext.season.clone(),
        description_html,
        image_url: extract_item_image(entry, item_ext),
        explicit: is_explicit(item_ext.explicit.as_deref()),
    }
}

/// Extracts the published timestamp.
/// feed-rs value first, then a flexible parse of the raw pubDate text.
fn extract_published(entry: &Entry, item_ext: &ItemExt) -> Option<DateTime<Utc>> {
    entry
        .published
        .or_else(|| item_ext.pub_date.as_deref().and_then(parse_flexible_time))
}

/// Checks if a link is an enclosure link.
fn is_enclosure_link(link: &Link) -> bool {
    link.rel.as_deref() == Some("enclosure")
}

/// Selects the episode's audio URL from enclosure links and media content.
/// Priority: audio/mpeg > audio/mp3 > audio/mp4 > audio/aac > any audio/ >
/// first enclosure of any type.
fn select_audio_url(entry: &Entry) -> Option<String> {
    let mut candidates: Vec<(String, Option<String>)> = Vec::new();

    for link in &entry.links {
        if is_enclosure_link(link) {
            candidates.push((link.href.clone(), link.media_type.clone()));
        }
    }
    for media in &entry.media {
        for content in &media.content {
            if let Some(ref url) = content.url {
                let mime = content.content_type.as_ref().map(|m| m.to_string());
                candidates.push((url.to_string(), mime));
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let priority_order = ["audio/mpeg", "audio/mp3", "audio/mp4", "audio/aac"];
    for priority in &priority_order {
        for (url, mime) in &candidates {
            if mime.as_deref() == Some(*priority) {
                return Some(url.clone());
            }
        }
    }
    for (url, mime) in &candidates {
        if mime.as_deref().is_some_and(|m| m.starts_with("audio/")) {
            return Some(url.clone());
        }
    }

    Some(candidates[0].0.clone())
}

/// Extracts the per-item image URL.
/// iTunes image from the extension first, then media thumbnails.
fn extract_item_image(entry: &Entry, item_ext: &ItemExt) -> Option<String> {
    if let Some(ref href) = item_ext.image_href {
        return Some(href.clone());
    }
    for media in &entry.media {
        if let Some(thumb) = media.thumbnails.first() {
            return Some(thumb.image.uri.clone());
        }
    }
    None
}
