// ABOUTME: HTTP client for fetching the podcast feed.
// ABOUTME: Thin reqwest wrapper mapping network failures to FeedError::Unavailable.

use std::time::Duration;

use crate::error::FeedError;
use crate::models::ParsedFeed;
use crate::parser::parse_feed_bytes;

/// The production feed URL.
pub const DEFAULT_FEED_URL: &str = "https://feeds.megaphone.fm/thetheatrepodcast";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("callboard/", env!("CARGO_PKG_VERSION"));

/// Fetches and parses the upstream podcast feed.
///
/// One fetch per call, no caching and no retry; the caller decides how
/// often to refresh.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    feed_url: String,
}

impl FeedClient {
    /// Creates a client for the given feed URL with default settings.
    pub fn new(feed_url: impl Into<String>) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(FeedError::unavailable)?;
        Ok(Self::with_http_client(http, feed_url))
    }

    /// Creates a client around an existing reqwest client.
    pub fn with_http_client(http: reqwest::Client, feed_url: impl Into<String>) -> Self {
        Self {
            http,
            feed_url: feed_url.into(),
        }
    }

    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    /// Fetches the feed and parses it.
    ///
    /// Network failures and non-success HTTP statuses map to
    /// `FeedError::Unavailable`; malformed documents to `FeedError::Parse`.
    pub async fn fetch_feed(&self) -> Result<ParsedFeed, FeedError> {
        let response = self
            .http
            .get(&self.feed_url)
            .send()
            .await
            .map_err(FeedError::unavailable)?;

        let response = response.error_for_status().map_err(FeedError::unavailable)?;
        let body = response.bytes().await.map_err(FeedError::unavailable)?;

        parse_feed_bytes(&body)
    }
}
