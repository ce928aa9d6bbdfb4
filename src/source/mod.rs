//! Comment acquisition from social platforms.
//!
//! The detection core only requires a flat sequence of raw comment strings;
//! everything platform-specific lives behind [`CommentSource`].

pub mod error;
pub mod youtube;

#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use error::SourceError;
pub use youtube::YouTubeCommentSource;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockCommentSource;

use async_trait::async_trait;

/// Fetches the comments attached to a piece of content.
#[async_trait]
pub trait CommentSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<String>, SourceError>;
}

/// Social platform recognized from a content URL (response metadata only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    YouTube,
    TwitterX,
    Instagram,
    TikTok,
    Unknown,
}

impl Platform {
    pub fn from_url(url: &str) -> Self {
        if url.contains("youtube.com") || url.contains("youtu.be") {
            Platform::YouTube
        } else if url.contains("twitter.com") || url.contains("x.com") {
            Platform::TwitterX
        } else if url.contains("instagram.com") {
            Platform::Instagram
        } else if url.contains("tiktok.com") {
            Platform::TikTok
        } else {
            Platform::Unknown
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Platform::YouTube => "YouTube",
            Platform::TwitterX => "Twitter/X",
            Platform::Instagram => "Instagram",
            Platform::TikTok => "TikTok",
            Platform::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
