use std::sync::Arc;

use crate::detector::AbuseDetector;
use crate::source::CommentSource;

/// Shared handler state: the detection service plus the comment source.
///
/// Both are constructed once at startup; the detector owns the immutable
/// reference corpus and the oracle handle.
#[derive(Clone)]
pub struct AppState {
    pub detector: Arc<AbuseDetector>,
    pub comment_source: Option<Arc<dyn CommentSource>>,
    pub lexicon_version: u32,
}

impl AppState {
    pub fn new(
        detector: Arc<AbuseDetector>,
        comment_source: Option<Arc<dyn CommentSource>>,
        lexicon_version: u32,
    ) -> Self {
        Self {
            detector,
            comment_source,
            lexicon_version,
        }
    }
}
