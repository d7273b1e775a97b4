//! Metadata cache.
//!
//! A flat key-value store from canonical URL to the record extracted for it,
//! behind a get/put trait so the handler does not care whether entries live
//! in a JSON file or in memory. Entries are stamped at write time and never
//! invalidated: once a video has been analyzed, the stored record is served
//! forever.

pub mod file;
pub mod memory;

pub use file::FileCache;
pub use memory::MemoryCache;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::extractor::VideoMetadata;
use crate::normalizer::CanonicalUrl;

/// Timestamp format recorded alongside each cached record.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A metadata record plus the moment it was stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedRecord {
    #[serde(flatten)]
    pub metadata: VideoMetadata,
    pub timestamp: String,
}

impl CachedRecord {
    pub fn new(metadata: VideoMetadata) -> Self {
        Self {
            metadata,
            timestamp: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

#[async_trait]
pub trait MetadataCache: Send + Sync {
    async fn get(&self, url: &CanonicalUrl) -> Result<Option<CachedRecord>>;

    /// Store a record for `url`, replacing any previous entry. Concurrent
    /// puts for the same key resolve to last-writer-wins.
    async fn put(&self, url: &CanonicalUrl, metadata: VideoMetadata) -> Result<()>;
}
