//! Canned comment source for tests and examples.

use async_trait::async_trait;

use super::error::SourceError;
use super::CommentSource;

/// Returns a fixed comment batch for any URL (or a fixed error).
#[derive(Default)]
pub struct MockCommentSource {
    comments: Vec<String>,
    fail: bool,
}

impl MockCommentSource {
    pub fn new(comments: Vec<String>) -> Self {
        Self {
            comments,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            comments: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl CommentSource for MockCommentSource {
    async fn fetch(&self, url: &str) -> Result<Vec<String>, SourceError> {
        if self.fail {
            return Err(SourceError::UnsupportedPlatform {
                url: url.to_string(),
            });
        }
        Ok(self.comments.clone())
    }
}
