// ABOUTME: Error types for feed fetching and parsing.
// ABOUTME: Provides FeedError with Unavailable, Parse, and Invalid variants.

use std::fmt;
use thiserror::Error;

/// Errors that can occur while fetching or parsing the podcast feed.
///
/// A failure here is fatal for the current request; malformed individual
/// items are defaulted during normalization and never surface as errors.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The upstream feed could not be fetched (network or HTTP failure).
    #[error("feed unavailable: {0}")]
    Unavailable(String),

    /// Failed to parse the feed data (malformed XML).
    #[error("failed to parse feed: {0}")]
    Parse(String),

    /// The data was parsed but is not a valid feed.
    #[error("invalid feed: {0}")]
    Invalid(String),
}

impl FeedError {
    /// Creates an Unavailable error from an underlying fetch error.
    pub fn unavailable(err: impl fmt::Display) -> Self {
        FeedError::Unavailable(err.to_string())
    }

    /// Creates a Parse error from an underlying parser error.
    pub fn parse(err: impl fmt::Display) -> Self {
        FeedError::Parse(err.to_string())
    }

    /// Creates an Invalid error with a custom message.
    pub fn invalid(msg: impl Into<String>) -> Self {
        FeedError::Invalid(msg.into())
    }
}
