//! In-memory cache for tests and cache-less deployments.

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;

use crate::cache::{CachedRecord, MetadataCache};
use crate::extractor::VideoMetadata;
use crate::normalizer::CanonicalUrl;

#[derive(Default)]
pub struct MemoryCache {
    entries: DashMap<String, CachedRecord>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl MetadataCache for MemoryCache {
    async fn get(&self, url: &CanonicalUrl) -> Result<Option<CachedRecord>> {
        Ok(self.entries.get(url.as_str()).map(|e| e.value().clone()))
    }

    async fn put(&self, url: &CanonicalUrl, metadata: VideoMetadata) -> Result<()> {
        self.entries
            .insert(url.as_str().to_string(), CachedRecord::new(metadata));
        Ok(())
    }
}
