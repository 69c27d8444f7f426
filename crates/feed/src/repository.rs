// ABOUTME: In-memory episode repository built from one normalized feed fetch.
// ABOUTME: Lookup, substring search, sorting, and offset/limit pagination.

use crate::models::{Episode, Page, ParsedFeed};
use crate::normalize::normalize_feed;

/// Sort order for episode listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

/// Read-only view over one fetch's normalized episodes, newest first.
/// Rebuilt from scratch on every fetch; never mutated in place.
#[derive(Debug, Clone, Default)]
pub struct EpisodeRepository {
    episodes: Vec<Episode>,
}

impl EpisodeRepository {
    /// Wraps an already-normalized episode list (assumed newest first).
    pub fn new(episodes: Vec<Episode>) -> Self {
        Self { episodes }
    }

    /// Normalizes a parsed feed and wraps the result.
    pub fn from_feed(feed: &ParsedFeed) -> Self {
        Self::new(normalize_feed(feed))
    }

    /// All episodes, newest first.
    pub fn all(&self) -> &[Episode] {
        &self.episodes
    }

    pub fn total(&self) -> usize {
        self.episodes.len()
    }

    /// The most recently published episode.
    pub fn latest(&self) -> Option<&Episode> {
        self.episodes.first()
    }

    /// The n most recent episodes.
    pub fn recent(&self, n: usize) -> &[Episode] {
        &self.episodes[..n.min(self.episodes.len())]
    }

    pub fn by_id(&self, id: &str) -> Option<&Episode> {
        self.episodes.iter().find(|ep| ep.id == id)
    }

    pub fn by_slug(&self, slug: &str) -> Option<&Episode> {
        self.episodes.iter().find(|ep| ep.slug == slug)
    }

    /// Looks up by slug first, then by id. Slug wins when a key matches both.
    pub fn by_slug_or_id(&self, key: &str) -> Option<&Episode> {
        self.by_slug(key).or_else(|| self.by_id(key))
    }

    /// Case-insensitive substring search over title, description, and guest
    /// names. Result order follows the episode list; no ranking.
    pub fn search(&self, query: &str) -> Vec<&Episode> {
        let needle = query.to_lowercase();
        self.episodes
            .iter()
            .filter(|ep| {
                ep.title.to_lowercase().contains(&needle)
                    || ep.description.to_lowercase().contains(&needle)
                    || ep
                        .guests
                        .iter()
                        .any(|g| g.name.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Episodes in the given order. NewestFirst is the stored order.
    pub fn sorted(&self, order: SortOrder) -> Vec<Episode> {
        match order {
            SortOrder::NewestFirst => self.episodes.clone(),
            SortOrder::OldestFirst => {
                let mut episodes = self.episodes.clone();
                episodes.reverse();
                episodes
            }
        }
    }

    /// One page of episodes in the given order.
    ///
    /// Negative offset or limit is clamped to zero; an offset past the end
    /// yields an empty page. `has_more` reflects whether another page
    /// exists after this one.
    pub fn paginate(&self, order: SortOrder, offset: i64, limit: i64) -> Page {
        let total = self.episodes.len();
        let offset = usize::try_from(offset.max(0)).unwrap_or(0);
        let limit = usize::try_from(limit.max(0)).unwrap_or(0);

        let ordered = self.sorted(order);
        let episodes: Vec<Episode> = ordered.into_iter().skip(offset).take(limit).collect();

        Page {
            episodes,
            has_more: offset + limit < total,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Guest;
    use chrono::{TimeZone, Utc};

    fn episode(n: u32, title: &str, guest: Option<&str>) -> Episode {
        Episode {
            id: format!("guid-{n}"),
            slug: format!("slug-{n}"),
            title: title.to_string(),
            description: format!("<p>Notes for {title}</p>"),
            published_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
                + chrono::Duration::days(i64::from(n)),
            duration: 60,
            audio_url: format!("https://cdn.example.com/{n}.mp3"),
            image_url: String::new(),
            guests: guest
                .map(|g| {
                    vec![Guest {
                        name: g.to_string(),
                    }]
                })
                .unwrap_or_default(),
            episode_number: Some(n),
            season: None,
        }
    }

    fn repo(count: u32) -> EpisodeRepository {
        // Stored newest first, like normalize_feed produces
        let mut episodes: Vec<Episode> = (1..=count)
            .map(|n| episode(n, &format!("Episode {n}"), None))
            .collect();
        episodes.reverse();
        EpisodeRepository::new(episodes)
    }

    #[test]
    fn test_latest_and_recent() {
        let repo = repo(5);
        assert_eq!(repo.latest().unwrap().title, "Episode 5");
        let recent = repo.recent(3);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].title, "Episode 5");
        assert_eq!(recent[2].title, "Episode 3");

        // Asking for more than exist returns everything
        assert_eq!(repo.recent(99).len(), 5);
        assert!(EpisodeRepository::default().latest().is_none());
    }

    #[test]
    fn test_lookup_by_slug_or_id() {
        let repo = repo(3);
        assert_eq!(repo.by_id("guid-2").unwrap().title, "Episode 2");
        assert_eq!(repo.by_slug("slug-3").unwrap().title, "Episode 3");
        assert_eq!(repo.by_slug_or_id("slug-1").unwrap().title, "Episode 1");
        assert_eq!(repo.by_slug_or_id("guid-1").unwrap().title, "Episode 1");
        assert!(repo.by_slug_or_id("missing").is_none());
    }

    #[test]
    fn test_slug_wins_over_id() {
        let mut a = episode(1, "By Id", None);
        a.id = "shared-key".to_string();
        let mut b = episode(2, "By Slug", None);
        b.slug = "shared-key".to_string();

        let repo = EpisodeRepository::new(vec![a, b]);
        assert_eq!(repo.by_slug_or_id("shared-key").unwrap().title, "By Slug");
    }

    #[test]
    fn test_search_matches_title_description_guests() {
        let episodes = vec![
            episode(3, "A Night at the Opera", None),
            episode(2, "Wicked Retrospective", None),
            episode(1, "Chat", Some("Elphaba Wicked-Smith")),
        ];
        let repo = EpisodeRepository::new(episodes);

        let hits = repo.search("wicked");
        assert_eq!(hits.len(), 2);
        // Input order preserved
        assert_eq!(hits[0].title, "Wicked Retrospective");
        assert_eq!(hits[1].title, "Chat");

        let hits = repo.search("notes for a night");
        assert_eq!(hits.len(), 1);

        assert!(repo.search("zzz").is_empty());
    }

    #[test]
    fn test_sorted_oldest_first() {
        let repo = repo(3);
        let oldest = repo.sorted(SortOrder::OldestFirst);
        assert_eq!(oldest[0].title, "Episode 1");
        assert_eq!(oldest[2].title, "Episode 3");
    }

    #[test]
    fn test_paginate_pages() {
        let repo = repo(25);

        let page = repo.paginate(SortOrder::NewestFirst, 0, 10);
        assert_eq!(page.episodes.len(), 10);
        assert_eq!(page.episodes[0].title, "Episode 25");
        assert!(page.has_more);
        assert_eq!(page.total, 25);

        let page = repo.paginate(SortOrder::NewestFirst, 20, 10);
        assert_eq!(page.episodes.len(), 5);
        assert!(!page.has_more);

        // Boundary: offset + limit == total
        let page = repo.paginate(SortOrder::NewestFirst, 15, 10);
        assert!(!page.has_more);
    }

    #[test]
    fn test_paginate_out_of_range_offset() {
        let repo = repo(5);
        let page = repo.paginate(SortOrder::NewestFirst, 100, 10);
        assert!(page.episodes.is_empty());
        assert!(!page.has_more);
        assert_eq!(page.total, 5);
    }

    #[test]
    fn test_paginate_clamps_negative_inputs() {
        let repo = repo(5);

        let page = repo.paginate(SortOrder::NewestFirst, -3, 2);
        assert_eq!(page.episodes.len(), 2);
        assert_eq!(page.episodes[0].title, "Episode 5");

        let page = repo.paginate(SortOrder::NewestFirst, 0, -1);
        assert!(page.episodes.is_empty());
        assert!(page.has_more);
    }
}
