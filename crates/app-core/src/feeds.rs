//! Feed management
//!
//! This module provides the post-card feed behind the deck screen: the card
//! type, the source that supplies and records swipes on cards, and the deck
//! position/loading state.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Errors that can occur during feed operations
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Backend or API error
    #[error("Source error: {0}")]
    Source(String),

    /// JSON parsing error
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// No card at the requested index
    #[error("No card at index {0}")]
    UnknownCard(usize),
}

/// Result type for feed operations
pub type Result<T> = std::result::Result<T, FeedError>;

/// A single post shown as a card in the deck
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostCard {
    /// Post id, used as the card key
    pub pid: String,

    /// Image URL
    #[serde(rename = "downloadURL")]
    pub download_url: String,

    /// Display name shown on the card
    pub name: String,
}

impl PostCard {
    /// Create a new card
    pub fn new(
        pid: impl Into<String>,
        download_url: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            pid: pid.into(),
            download_url: download_url.into(),
            name: name.into(),
        }
    }

    /// Parse a JSON array of posts as returned by the backend
    pub fn list_from_json(json: &str) -> Result<Vec<PostCard>> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Direction a card left the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    /// Swiped left ("Nope")
    Left,
    /// Swiped right ("Like")
    Right,
}

/// Backend supplying cards and recording reactions
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetch the currently active posts
    async fn active_posts(&self) -> Result<Vec<PostCard>>;

    /// Record a like on a post
    async fn like_post(&self, pid: String) -> Result<()>;

    /// Record a pass on a post
    async fn nope_post(&self, pid: String) -> Result<()>;
}

/// Position and loading state of the card deck
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedDeck {
    index: usize,
    is_loading: bool,
    posts: Vec<PostCard>,
}

impl FeedDeck {
    /// Create an empty deck
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck holding the given posts
    pub fn with_posts(posts: Vec<PostCard>) -> Self {
        Self {
            posts,
            ..Self::default()
        }
    }

    /// Index of the top card
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether a reload is in progress
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// All posts in the deck
    pub fn posts(&self) -> &[PostCard] {
        &self.posts
    }

    /// Whether the deck holds no posts
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Card at an index
    pub fn card(&self, index: usize) -> Result<&PostCard> {
        self.posts.get(index).ok_or(FeedError::UnknownCard(index))
    }

    /// Record that the card at `index` left the deck
    pub fn advance_past(&mut self, index: usize) {
        self.index = self.index.max(index + 1).min(self.posts.len());
    }

    /// Enter the loading state
    pub fn begin_reload(&mut self) {
        self.is_loading = true;
    }

    /// Leave the loading state with the outcome of a reload
    ///
    /// A failed reload keeps the previous posts.
    pub fn finish_reload(&mut self, result: Result<Vec<PostCard>>) {
        self.is_loading = false;
        match result {
            Ok(posts) => {
                tracing::debug!(count = posts.len(), "feed reloaded");
                self.posts = posts;
                self.index = 0;
            }
            Err(e) => {
                tracing::warn!("Failed to load posts: {}", e);
            }
        }
    }
}
