//! YouTube Data API comment client.
//!
//! Pages through `commentThreads` until the API stops returning a
//! continuation token. The API key comes from configuration; there is no
//! embedded credential.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use super::error::SourceError;
use super::{CommentSource, Platform};

const COMMENT_THREADS_URL: &str = "https://www.googleapis.com/youtube/v3/commentThreads";
const PAGE_SIZE: u32 = 100;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadsResponse {
    #[serde(default)]
    items: Vec<CommentThread>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommentThread {
    snippet: ThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThreadSnippet {
    top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
struct TopLevelComment {
    snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentSnippet {
    text_display: String,
}

/// Comment source backed by the YouTube Data API v3.
#[derive(Debug, Clone)]
pub struct YouTubeCommentSource {
    client: reqwest::Client,
    api_key: String,
}

impl YouTubeCommentSource {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    pub fn with_client(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
        }
    }

    /// Extracts the video id from `youtu.be/<id>` and
    /// `youtube.com/watch?v=<id>` URL forms.
    pub fn extract_video_id(url: &str) -> Option<String> {
        let stripped = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .unwrap_or(url);

        if let Some(rest) = stripped
            .strip_prefix("youtu.be/")
            .or_else(|| stripped.strip_prefix("www.youtu.be/"))
        {
            let id: String = rest
                .chars()
                .take_while(|c| *c != '?' && *c != '&' && *c != '/')
                .collect();
            return (!id.is_empty()).then_some(id);
        }

        if stripped.contains("youtube.com/") {
            let query = stripped.split_once('?').map(|(_, q)| q)?;
            for param in query.split('&') {
                if let Some((key, value)) = param.split_once('=') {
                    if key == "v" && !value.is_empty() {
                        return Some(value.to_string());
                    }
                }
            }
        }

        None
    }
}

#[async_trait]
impl CommentSource for YouTubeCommentSource {
    async fn fetch(&self, url: &str) -> Result<Vec<String>, SourceError> {
        if Platform::from_url(url) != Platform::YouTube {
            return Err(SourceError::UnsupportedPlatform {
                url: url.to_string(),
            });
        }

        let video_id = Self::extract_video_id(url).ok_or_else(|| SourceError::InvalidUrl {
            url: url.to_string(),
        })?;

        let mut comments = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self.client.get(COMMENT_THREADS_URL).query(&[
                ("part", "snippet"),
                ("videoId", video_id.as_str()),
                ("key", self.api_key.as_str()),
                ("maxResults", &PAGE_SIZE.to_string()),
                ("textFormat", "plainText"),
            ]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(SourceError::ApiError {
                    status: status.as_u16(),
                    body,
                });
            }

            let page: CommentThreadsResponse = response.json().await?;
            debug!(
                video_id = %video_id,
                page_comments = page.items.len(),
                "Fetched comment page"
            );

            comments.extend(
                page.items
                    .into_iter()
                    .map(|t| t.snippet.top_level_comment.snippet.text_display),
            );

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        info!(video_id = %video_id, comments = comments.len(), "Fetched all comments");
        Ok(comments)
    }
}
