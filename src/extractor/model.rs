use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Placeholder for a field the page did not expose.
pub const NOT_AVAILABLE: &str = "N/A";

/// Maximum number of tags carried in a record.
pub const MAX_TAGS: usize = 5;

/// Normalized metadata for a single video.
///
/// View count and duration stay display text; the page does not reliably
/// expose them as numbers. Never mutated after construction, serialized flat
/// into the analyze response and into the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VideoMetadata {
    pub title: String,
    pub channel: String,
    pub views: String,
    pub duration: String,
    pub thumbnail: String,
    pub tags: Vec<String>,
}

impl VideoMetadata {
    /// A record where nothing could be extracted. This is still a success:
    /// extraction degrades per field, it does not fail the request.
    pub fn unavailable() -> Self {
        Self {
            title: NOT_AVAILABLE.to_string(),
            channel: NOT_AVAILABLE.to_string(),
            views: NOT_AVAILABLE.to_string(),
            duration: NOT_AVAILABLE.to_string(),
            thumbnail: NOT_AVAILABLE.to_string(),
            tags: Vec::new(),
        }
    }
}
